pub struct TreeNode {
    pub val: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

pub fn invert_tree(root: Option<Box<TreeNode>>) -> Option<Box<TreeNode>> {
    root.map(|mut node| {
        let left = invert_tree(node.left.take());
        let right = invert_tree(node.right.take());
        node.left = right;
        node.right = left;
        node
    })
}

pub fn from_slots(slots: &[Option<i64>], i: usize) -> Option<Box<TreeNode>> {
    let val = slots.get(i).copied().flatten()?;
    let left = from_slots(slots, 2 * i + 1);
    let right = from_slots(slots, 2 * i + 2);
    Some(Box::new(TreeNode { val, left, right }))
}

pub fn to_slots(root: &Option<Box<TreeNode>>) -> Vec<Option<i64>> {
    fn fill(node: &Option<Box<TreeNode>>, i: usize, slots: &mut Vec<Option<i64>>) {
        if let Some(node) = node {
            if slots.len() <= i {
                slots.resize(i + 1, None);
            }
            slots[i] = Some(node.val);
            fill(&node.left, 2 * i + 1, slots);
            fill(&node.right, 2 * i + 2, slots);
        }
    }
    let mut slots = Vec::new();
    fill(root, 0, &mut slots);
    slots
}
