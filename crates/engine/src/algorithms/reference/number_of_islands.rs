use std::collections::VecDeque;

pub fn num_islands(grid: &[Vec<u8>]) -> usize {
    let mut seen: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
    let mut count = 0;
    for r in 0..grid.len() {
        for c in 0..grid[r].len() {
            if grid[r][c] != 1 || seen[r][c] {
                continue;
            }
            count += 1;
            seen[r][c] = true;
            let mut queue = VecDeque::from([(r, c)]);
            while let Some((cr, cc)) = queue.pop_front() {
                let neighbors = [
                    (cr.wrapping_sub(1), cc),
                    (cr + 1, cc),
                    (cr, cc.wrapping_sub(1)),
                    (cr, cc + 1),
                ];
                for (nr, nc) in neighbors {
                    if nr < grid.len() && nc < grid[nr].len() && grid[nr][nc] == 1 && !seen[nr][nc] {
                        seen[nr][nc] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
        }
    }
    count
}
