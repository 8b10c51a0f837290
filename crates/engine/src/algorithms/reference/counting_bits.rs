pub fn count_bits(n: usize) -> Vec<u32> {
    let mut ans = vec![0; n + 1];
    for i in 1..=n {
        ans[i] = ans[i >> 1] + (i & 1) as u32;
    }
    ans
}
