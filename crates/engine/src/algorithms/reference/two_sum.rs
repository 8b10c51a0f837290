use std::collections::HashMap;

pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (i, &num) in nums.iter().enumerate() {
        let complement = target.checked_sub(num);
        if let Some(&j) = complement.and_then(|c| seen.get(&c)) {
            return Some((j, i));
        }
        seen.insert(num, i);
    }
    None
}
