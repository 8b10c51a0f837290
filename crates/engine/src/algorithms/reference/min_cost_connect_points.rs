pub fn min_cost_connect_points(points: &[[i32; 2]]) -> i64 {
    let n = points.len();
    let mut in_tree = vec![false; n];
    let mut best = vec![i64::MAX; n];
    let mut total = 0;
    if n > 0 {
        best[0] = 0;
    }
    for _ in 0..n {
        let mut u = usize::MAX;
        for v in 0..n {
            if !in_tree[v] && (u == usize::MAX || best[v] < best[u]) {
                u = v;
            }
        }
        in_tree[u] = true;
        total += best[u];
        for v in 0..n {
            let dist = i64::from(points[u][0].abs_diff(points[v][0])) + i64::from(points[u][1].abs_diff(points[v][1]));
            if !in_tree[v] && dist < best[v] {
                best[v] = dist;
            }
        }
    }
    total
}
