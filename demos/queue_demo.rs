//! # Bounded FIFO Demo
//!
//! Walks a five-slot `u32` queue through its whole life: fill it, overflow
//! it, read it by index, drain it, refill and reverse it, then clear it.
//!
//! Run with: `cargo run --example queue_demo`

use anyhow::{ensure, Result};

use bounded_fifo::{QueueConfig, QueueError, SharedQueue};

const QUEUE_SIZE: usize = 5;

fn main() -> Result<()> {
    // Initialize logging so we can see what's happening
    bounded_fifo::init_logging();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║           Bounded FIFO Demo                                ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║ A 5-slot queue of u32 values, step by step.                ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    // Step 1: initialize
    println!("Step 1: Initialize queue");
    let queue = SharedQueue::with_config(&QueueConfig::for_type::<u32>(QUEUE_SIZE))?;
    println!("   Capacity: {}, count: {}, empty: {}", queue.capacity(), queue.len(), queue.is_empty());
    println!();

    // Step 2: fill
    println!("Step 2: Enqueue elements");
    for i in 1..=QUEUE_SIZE as u32 {
        queue.enqueue_value(i)?;
        let front = queue.peek_value::<u32>(0)?;
        let rear = queue.peek_value::<u32>(queue.len() - 1)?;
        println!("   Added {} | count {} | front {} | rear {}", i, queue.len(), front, rear);
    }
    println!();

    // Step 3: overflow is refused, not overwritten
    println!("Step 3: Enqueue into full queue");
    let extra = 99u32;
    let status = queue.enqueue_value(extra);
    println!("   Enqueue {} -> {:?}", extra, status);
    ensure!(status == Err(QueueError::Full), "full queue accepted an element");
    println!();

    // Step 4: read by index
    println!("Step 4: Peek by index");
    for index in 0..queue.len() {
        println!("   Index {} -> {}", index, queue.peek_value::<u32>(index)?);
    }
    println!();

    // Step 5: drain
    println!("Step 5: Dequeue all elements");
    while !queue.is_empty() {
        let value = queue.dequeue_value::<u32>()?;
        println!("   Dequeued {} | count {}", value, queue.len());
    }
    println!();

    // Step 6: refill and reverse
    println!("Step 6: Enqueue elements for reverse");
    for i in 10..10 + QUEUE_SIZE as u32 {
        queue.enqueue_value(i)?;
    }
    print_contents("Before reverse", &queue)?;

    queue.reverse()?;
    print_contents("After reverse", &queue)?;
    println!();

    // Step 7: clear
    println!("Step 7: Clear queue");
    queue.clear()?;
    println!("   Empty: {}, count: {}", queue.is_empty(), queue.len());
    println!();

    println!("📊 Final Statistics:");
    let stats = queue.stats();
    println!("   Enqueued: {}", stats.enqueued);
    println!("   Dequeued: {}", stats.dequeued);
    println!("   Rejected (full): {}", stats.rejected_full);
    println!();

    println!("👋 Demo complete!");
    Ok(())
}

fn print_contents(label: &str, queue: &SharedQueue) -> Result<()> {
    let values = (0..queue.len())
        .map(|index| queue.peek_value::<u32>(index))
        .collect::<Result<Vec<_>, _>>()?;
    println!("   {}: {:?}", label, values);
    Ok(())
}
