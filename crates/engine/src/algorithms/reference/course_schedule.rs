use std::collections::VecDeque;

pub fn can_finish(num_courses: usize, prerequisites: &[[usize; 2]]) -> bool {
    let mut graph = vec![Vec::new(); num_courses];
    let mut indegree = vec![0; num_courses];
    for &[course, pre] in prerequisites {
        graph[pre].push(course);
        indegree[course] += 1;
    }
    let mut queue: VecDeque<usize> = (0..num_courses).filter(|&c| indegree[c] == 0).collect();
    let mut taken = 0;
    while let Some(course) = queue.pop_front() {
        taken += 1;
        for &next in &graph[course] {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push_back(next);
            }
        }
    }
    taken == num_courses
}
