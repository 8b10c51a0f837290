pub struct ListNode {
    pub val: i64,
    pub next: Option<Box<ListNode>>,
}

pub fn reverse_list(mut head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut prev = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

pub fn from_values(values: &[i64]) -> Option<Box<ListNode>> {
    values.iter().rev().fold(None, |next, &val| Some(Box::new(ListNode { val, next })))
}

pub fn to_values(mut head: &Option<Box<ListNode>>) -> Vec<i64> {
    let mut values = Vec::new();
    while let Some(node) = head {
        values.push(node.val);
        head = &node.next;
    }
    values
}
