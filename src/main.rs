use queue_lib::collections::queue::{AnyQueue, QueueKind, StackPairQueue};
use queue_lib::collections::traits::Queue;

fn main() {
    for kind in [QueueKind::Array, QueueKind::StackPair] {
        println!("\n[{kind:?}]\n");

        let mut queue = AnyQueue::new(kind);
        for i in 1..=3 {
            queue.enqueue(i);
        }
        println!("{:?}", queue);

        println!("dequeue -> {:?}", queue.dequeue());
        queue.enqueue(4);
        println!("{:?}", queue);

        while let Some(value) = queue.dequeue() {
            println!("dequeue -> {value}");
        }
        println!("dequeue -> {:?}, is_empty -> {}", queue.dequeue(), queue.is_empty());
    }

    println!("\n[Transfers]\n");

    let mut queue = StackPairQueue::new();
    queue.enqueue("A");
    queue.enqueue("B");
    println!("{:?}", queue);

    println!("peek -> {:?}", queue.peek());
    println!("{:?}", queue);

    println!("dequeue -> {:?}", queue.dequeue());
    queue.enqueue("C");
    println!("{:?}", queue);

    while let Some(value) = queue.dequeue() {
        println!("dequeue -> {value}, {:?}", queue);
    }
}
