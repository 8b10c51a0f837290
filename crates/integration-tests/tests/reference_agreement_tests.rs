// AlgoTrace - Instrumented Algorithm Catalog
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Answer consistency between instrumented algorithms and their plain listings
//!
//! Every battery runs the edge cases (empty, single element, duplicates,
//! sorted and reverse-sorted input) followed by seeded random inputs, and
//! requires the terminal result to match the non-instrumented reference.

use algotrace_common::Trace;
use algotrace_engine::{
    algorithms::{reference, *},
    Instrumented,
};
use algotrace_integration_tests::test_utils::{init, inputs};
use itertools::Itertools;
use rand::Rng;
use serde_json::{json, Value};
use tracing::info;

/// Run `A` on `input`, check the trace is valid and return its result
fn traced_result<A: Instrumented>(input: &A::Input) -> Value {
    let trace: Trace = A::trace(input);
    let violations = trace.validate(A::LISTING.lines().count());
    assert!(violations.is_empty(), "{} produced an invalid trace: {violations:?}", A::ID);
    trace.result().cloned().unwrap_or(Value::Null)
}

fn array_edge_cases() -> Vec<Vec<i64>> {
    vec![vec![], vec![7], vec![3, 3, 3, 3], vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1], vec![-2, 0, -2]]
}

#[test]
fn test_two_sum_agrees() {
    init::init_test_environment();
    info!("Testing two-sum against its reference");

    let mut rng = inputs::rng(1);
    let cases = array_edge_cases()
        .into_iter()
        .map(|nums| (nums, 6))
        .chain([(vec![i64::MIN, 5], 1), (vec![i64::MAX, -3, i64::MIN], -1)])
        .chain((0..inputs::BATTERY_SIZE).map(|_| {
            let nums = inputs::nums(&mut rng, 8, -5, 5);
            (nums, rng.random_range(-6..=6))
        }))
        .collect_vec();

    for (nums, target) in cases {
        let expected = match reference::two_sum::two_sum(&nums, target) {
            Some((j, i)) => json!([j, i]),
            None => json!([]),
        };
        let input = TwoSumInput { nums: nums.clone(), target };
        assert_eq!(traced_result::<TwoSum>(&input), expected, "nums {nums:?} target {target}");
    }
}

#[test]
fn test_binary_search_agrees() {
    init::init_test_environment();

    let mut rng = inputs::rng(2);
    for _ in 0..inputs::BATTERY_SIZE {
        let nums = inputs::sorted_distinct(&mut rng, 12);
        let target = match nums.first() {
            Some(_) if rng.random_bool(0.5) => {
                nums[rng.random_range(0..nums.len())]
            }
            _ => rng.random_range(-55..=55),
        };
        let expected = json!(reference::binary_search::binary_search(&nums, target));
        let input = BinarySearchInput { nums: nums.clone(), target };
        assert_eq!(traced_result::<BinarySearch>(&input), expected, "nums {nums:?} target {target}");
    }
}

#[test]
fn test_valid_parentheses_agrees() {
    init::init_test_environment();

    let mut rng = inputs::rng(3);
    let alphabet = ['(', ')', '[', ']', '{', '}'];
    let cases = ["", "(", ")", "()", "([)]", "{[]}", "((((", "))))"]
        .into_iter()
        .map(String::from)
        .chain((0..inputs::BATTERY_SIZE).map(|_| inputs::word(&mut rng, 8, &alphabet)))
        .collect_vec();

    for s in cases {
        let expected = json!(reference::valid_parentheses::is_valid(&s));
        let input = ValidParenthesesInput { s: s.clone() };
        assert_eq!(traced_result::<ValidParentheses>(&input), expected, "s {s:?}");
    }
}

#[test]
fn test_reverse_linked_list_agrees() {
    init::init_test_environment();

    let mut rng = inputs::rng(4);
    let cases = array_edge_cases()
        .into_iter()
        .chain((0..inputs::BATTERY_SIZE).map(|_| inputs::nums(&mut rng, 9, -20, 20)))
        .collect_vec();

    for head in cases {
        use reference::reverse_linked_list::{from_values, reverse_list, to_values};
        let expected = json!(to_values(&reverse_list(from_values(&head))));
        let input = ReverseLinkedListInput { head: head.clone() };
        assert_eq!(traced_result::<ReverseLinkedList>(&input), expected, "head {head:?}");
    }
}

#[test]
fn test_invert_binary_tree_agrees() {
    init::init_test_environment();
    info!("Testing tree inversion against its reference");

    let mut rng = inputs::rng(5);
    let cases = [vec![], vec![Some(1)], vec![None, Some(2)], vec![Some(1), None, Some(2), Some(9)]]
        .into_iter()
        .chain((0..inputs::BATTERY_SIZE).map(|_| inputs::tree_slots(&mut rng, 15)))
        .collect_vec();

    for root in cases {
        use reference::invert_binary_tree::{from_slots, invert_tree, to_slots};
        let expected = json!(to_slots(&invert_tree(from_slots(&root, 0))));
        let input = InvertBinaryTreeInput { root: root.clone() };
        assert_eq!(traced_result::<InvertBinaryTree>(&input), expected, "root {root:?}");
    }
}

#[test]
fn test_kth_largest_agrees() {
    init::init_test_environment();

    let mut rng = inputs::rng(6);
    let cases = array_edge_cases()
        .into_iter()
        .flat_map(|nums| (0..=nums.len() + 1).map(move |k| (nums.clone(), k)))
        .chain((0..inputs::BATTERY_SIZE).map(|_| {
            let nums = inputs::nums(&mut rng, 10, -9, 9);
            let k = rng.random_range(0..=nums.len() + 1);
            (nums, k)
        }))
        .collect_vec();

    for (nums, k) in cases {
        let expected = json!(reference::kth_largest::find_kth_largest(&nums, k));
        let input = KthLargestInput { nums: nums.clone(), k };
        assert_eq!(traced_result::<KthLargest>(&input), expected, "nums {nums:?} k {k}");
    }
}

#[test]
fn test_subsets_agrees() {
    init::init_test_environment();

    let mut rng = inputs::rng(7);
    let cases = array_edge_cases()
        .into_iter()
        .chain((0..inputs::BATTERY_SIZE / 4).map(|_| inputs::nums(&mut rng, 6, 0, 9)))
        .collect_vec();

    let canonical = |subsets: Vec<Vec<i64>>| -> Vec<Vec<i64>> {
        subsets.into_iter().map(|subset| subset.into_iter().sorted().collect_vec()).sorted().collect()
    };
    for nums in cases {
        let expected = canonical(reference::subsets::subsets(&nums));
        let traced: Vec<Vec<i64>> =
            serde_json::from_value(traced_result::<Subsets>(&SubsetsInput { nums: nums.clone() }))
                .unwrap();
        assert_eq!(canonical(traced), expected, "nums {nums:?}");
    }
}

#[test]
fn test_word_search_ii_agrees() {
    init::init_test_environment();
    info!("Testing board search against its reference");

    let mut rng = inputs::rng(8);
    let alphabet = ['a', 'b', '#'];
    for _ in 0..inputs::BATTERY_SIZE {
        let board = inputs::board(&mut rng, 4, &alphabet);
        let words = inputs::dictionary(&mut rng, 6, &alphabet);

        let expected =
            reference::word_search_ii::find_words(&board, &words).into_iter().sorted().collect_vec();
        let input = WordSearchIIInput { board: board.clone(), words: words.clone() };
        let traced: Vec<String> =
            serde_json::from_value(traced_result::<WordSearchII>(&input)).unwrap();
        assert_eq!(traced.into_iter().sorted().collect_vec(), expected, "board {board:?} words {words:?}");
    }
}

#[test]
fn test_number_of_islands_agrees() {
    init::init_test_environment();

    let mut rng = inputs::rng(9);
    let cases = [
        vec![],
        vec![vec![0]],
        vec![vec![1]],
        vec![vec![1; 4]; 3],
        vec![vec![1, 0, 1, 0, 1]],
        vec![vec![2, 1], vec![1, 2]],
    ]
        .into_iter()
        .chain((0..inputs::BATTERY_SIZE).map(|_| inputs::grid(&mut rng, 5, 6)))
        .collect_vec();

    for grid in cases {
        let expected = json!(reference::number_of_islands::num_islands(&grid));
        let input = NumberOfIslandsInput { grid: grid.clone() };
        assert_eq!(traced_result::<NumberOfIslands>(&input), expected, "grid {grid:?}");
    }
}

#[test]
fn test_course_schedule_agrees() {
    init::init_test_environment();

    let mut rng = inputs::rng(10);
    let cases = [(0, vec![]), (1, vec![]), (2, vec![[1, 0], [0, 1]]), (3, vec![[1, 0], [2, 1]])]
        .into_iter()
        .chain((0..inputs::BATTERY_SIZE).map(|_| {
            let num_courses = rng.random_range(1..=7);
            (num_courses, inputs::prerequisites(&mut rng, num_courses, 9))
        }))
        .collect_vec();

    for (num_courses, prerequisites) in cases {
        let expected = json!(reference::course_schedule::can_finish(num_courses, &prerequisites));
        let input = CourseScheduleInput { num_courses, prerequisites: prerequisites.clone() };
        assert_eq!(
            traced_result::<CourseSchedule>(&input),
            expected,
            "{num_courses} courses, prerequisites {prerequisites:?}"
        );
    }
}

#[test]
fn test_min_cost_connect_points_agrees() {
    init::init_test_environment();

    let mut rng = inputs::rng(11);
    let cases = [
        vec![],
        vec![[1, 1]],
        vec![[2, 2], [2, 2]],
        vec![[0, 0], [0, 5], [5, 0]],
        vec![[i32::MIN, 0], [i32::MAX, 0], [0, i32::MAX]],
    ]
        .into_iter()
        .chain((0..inputs::BATTERY_SIZE).map(|_| inputs::points(&mut rng, 7)))
        .collect_vec();

    for points in cases {
        let expected =
            json!(reference::min_cost_connect_points::min_cost_connect_points(&points));
        let input = MinCostConnectPointsInput { points: points.clone() };
        assert_eq!(traced_result::<MinCostConnectPoints>(&input), expected, "points {points:?}");
    }
}

#[test]
fn test_coin_change_agrees() {
    init::init_test_environment();
    info!("Testing coin change against its reference");

    let mut rng = inputs::rng(12);
    let cases = [(vec![1], 0), (vec![2], 3), (vec![3, 7], 11), (vec![5, 5, 5], 10)]
        .into_iter()
        .chain((0..inputs::BATTERY_SIZE).map(|_| {
            let coins = inputs::nums(&mut rng, 4, 1, 12)
                .into_iter()
                .filter_map(|coin| usize::try_from(coin).ok())
                .collect_vec();
            (coins, rng.random_range(0..=40))
        }))
        .collect_vec();

    for (coins, amount) in cases {
        let expected = json!(reference::coin_change::coin_change(&coins, amount));
        let input = CoinChangeInput { coins: coins.clone(), amount };
        assert_eq!(traced_result::<CoinChange>(&input), expected, "coins {coins:?} amount {amount}");
    }
}

#[test]
fn test_longest_common_subsequence_agrees() {
    init::init_test_environment();

    let mut rng = inputs::rng(13);
    let alphabet = ['a', 'b', 'c'];
    let cases = [("", ""), ("abc", ""), ("aaaa", "aa"), ("abcd", "dcba")]
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .chain((0..inputs::BATTERY_SIZE).map(|_| {
            (inputs::word(&mut rng, 7, &alphabet), inputs::word(&mut rng, 7, &alphabet))
        }))
        .collect_vec();

    for (text1, text2) in cases {
        let expected =
            json!(reference::longest_common_subsequence::longest_common_subsequence(&text1, &text2));
        let input =
            LongestCommonSubsequenceInput { text1: text1.clone(), text2: text2.clone() };
        assert_eq!(
            traced_result::<LongestCommonSubsequence>(&input),
            expected,
            "text1 {text1:?} text2 {text2:?}"
        );
    }
}

#[test]
fn test_counting_bits_agrees() {
    init::init_test_environment();

    for n in 0..=64 {
        let expected = json!(reference::counting_bits::count_bits(n));
        assert_eq!(traced_result::<CountingBits>(&CountingBitsInput { n }), expected, "n {n}");
    }
}
