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

//! The built-in instrumented algorithms.
//!
//! Each module pairs an [`crate::Instrumented`] implementation with a plain
//! reference listing under [`reference`]. Recorded code lines index into that
//! listing.

pub mod reference;

mod binary_search;
mod coin_change;
mod counting_bits;
mod course_schedule;
mod invert_binary_tree;
mod kth_largest;
mod longest_common_subsequence;
mod min_cost_connect_points;
mod number_of_islands;
mod reverse_linked_list;
mod subsets;
mod two_sum;
mod valid_parentheses;
mod word_search_ii;

pub use binary_search::*;
pub use coin_change::*;
pub use counting_bits::*;
pub use course_schedule::*;
pub use invert_binary_tree::*;
pub use kth_largest::*;
pub use longest_common_subsequence::*;
pub use min_cost_connect_points::*;
pub use number_of_islands::*;
pub use reverse_linked_list::*;
pub use subsets::*;
pub use two_sum::*;
pub use valid_parentheses::*;
pub use word_search_ii::*;

use crate::AlgorithmDescriptor;

/// Descriptors of every built-in algorithm, in catalog order
pub fn catalog() -> Vec<AlgorithmDescriptor> {
    vec![
        AlgorithmDescriptor::of::<TwoSum>(),
        AlgorithmDescriptor::of::<BinarySearch>(),
        AlgorithmDescriptor::of::<ValidParentheses>(),
        AlgorithmDescriptor::of::<ReverseLinkedList>(),
        AlgorithmDescriptor::of::<InvertBinaryTree>(),
        AlgorithmDescriptor::of::<KthLargest>(),
        AlgorithmDescriptor::of::<Subsets>(),
        AlgorithmDescriptor::of::<WordSearchII>(),
        AlgorithmDescriptor::of::<NumberOfIslands>(),
        AlgorithmDescriptor::of::<CourseSchedule>(),
        AlgorithmDescriptor::of::<MinCostConnectPoints>(),
        AlgorithmDescriptor::of::<CoinChange>(),
        AlgorithmDescriptor::of::<LongestCommonSubsequence>(),
        AlgorithmDescriptor::of::<CountingBits>(),
    ]
}
