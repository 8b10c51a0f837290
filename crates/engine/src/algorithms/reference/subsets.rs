pub fn subsets(nums: &[i64]) -> Vec<Vec<i64>> {
    let mut result = Vec::new();
    let mut current = Vec::new();
    backtrack(nums, 0, &mut current, &mut result);
    result
}

fn backtrack(nums: &[i64], start: usize, current: &mut Vec<i64>, result: &mut Vec<Vec<i64>>) {
    result.push(current.clone());
    for i in start..nums.len() {
        current.push(nums[i]);
        backtrack(nums, i + 1, current, result);
        current.pop();
    }
}
