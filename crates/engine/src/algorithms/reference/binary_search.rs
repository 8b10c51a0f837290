pub fn binary_search(nums: &[i64], target: i64) -> Option<usize> {
    let (mut left, mut right) = (0, nums.len());
    while left < right {
        let mid = left + (right - left) / 2;
        if nums[mid] == target {
            return Some(mid);
        } else if nums[mid] < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    None
}
