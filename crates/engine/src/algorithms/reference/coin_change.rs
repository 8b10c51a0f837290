pub fn coin_change(coins: &[usize], amount: usize) -> i64 {
    let mut dp = vec![i64::MAX; amount + 1];
    dp[0] = 0;
    for a in 1..=amount {
        for &coin in coins {
            if coin <= a && dp[a - coin] != i64::MAX {
                dp[a] = dp[a].min(dp[a - coin] + 1);
            }
        }
    }
    if dp[amount] == i64::MAX {
        -1
    } else {
        dp[amount]
    }
}
