use std::{cmp::Reverse, collections::BinaryHeap};

pub fn find_kth_largest(nums: &[i64], k: usize) -> Option<i64> {
    let mut heap = BinaryHeap::new();
    for &num in nums {
        heap.push(Reverse(num));
        if heap.len() > k {
            heap.pop();
        }
    }
    if k == 0 || heap.len() < k {
        return None;
    }
    heap.peek().map(|Reverse(top)| *top)
}
