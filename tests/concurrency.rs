use std::{
    sync::{Arc, Barrier},
    thread,
};

use sync_bitset::Bitset;

const THREADS: usize = 8;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_bitset_is_send_sync() {
    assert_send_sync::<Bitset>();
}

#[test]
fn test_concurrent_set_bit() {
    let bits = Arc::new(Bitset::new(1024));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let bits = Arc::clone(&bits);
            thread::spawn(move || {
                for pos in (t..bits.capacity()).step_by(THREADS) {
                    assert!(bits.set_bit(pos));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert!(bits.is_all_set());
    assert_eq!(bits.get_setbit_count(), 1024 * 8);
}

#[test]
fn test_concurrent_flip_ranges_cancel_out() {
    let bits = Arc::new(Bitset::new(64));
    let barrier = Arc::new(Barrier::new(THREADS));

    // Every thread flips the same overlapping range twice
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let bits = Arc::clone(&bits);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..100 {
                    bits.flip_range(3, 500).unwrap();
                    bits.flip_range(500, 3).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert!(bits.is_all_zero());
}

#[test]
fn test_values_are_never_torn() {
    let bits = Arc::new(Bitset::new(16));
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let bits = Arc::clone(&bits);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..2000 {
                let v = if i % 2 == 0 { 0 } else { u32::MAX };
                bits.set_val(5, 36, v).unwrap();
            }
        })
    };

    barrier.wait();
    for _ in 0..2000 {
        let v = bits.get_val(5, 36).unwrap();
        assert!(v == 0 || v == u32::MAX, "torn read {v:#x}");

        let snapshot = bits.clone();
        let v = snapshot.get_val(5, 36).unwrap();
        assert!(v == 0 || v == u32::MAX, "torn clone {v:#x}");
    }
    writer.join().unwrap();
}

#[test]
fn test_opposite_direction_ops_do_not_deadlock() {
    let a = Arc::new(Bitset::new(256));
    let b = Arc::new(Bitset::new(128));
    a.set_all();
    let barrier = Arc::new(Barrier::new(2));

    let t1 = {
        let (a, b, barrier) = (Arc::clone(&a), Arc::clone(&b), Arc::clone(&barrier));
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..1000 {
                a.or(&b);
                a.and(&b);
            }
        })
    };
    let t2 = {
        let (a, b, barrier) = (Arc::clone(&a), Arc::clone(&b), Arc::clone(&barrier));
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..1000 {
                b.xor(&a);
                b.xor(&a);
            }
        })
    };
    t1.join().unwrap();
    t2.join().unwrap();

    assert_eq!(b.size(), 128);
    assert_eq!(a.size(), 256);
    // Bytes of `a` beyond the operand are never touched
    assert!(a.get_bytes()[128..].iter().all(|&x| x == 0xFF));
}

#[test]
fn test_readers_see_consistent_counts() {
    let bits = Arc::new(Bitset::new(32));
    let barrier = Arc::new(Barrier::new(THREADS + 1));

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let bits = Arc::clone(&bits);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..500 {
                    let ones = bits.get_setbit_count();
                    assert!(ones == 0 || ones == 256, "partial set_all observed: {ones}");
                    let zeros = bits.get_zerobit_count();
                    assert!(zeros == 0 || zeros == 256, "partial clear_all observed: {zeros}");
                }
            })
        })
        .collect();

    barrier.wait();
    for i in 0..500 {
        if i % 2 == 0 {
            bits.set_all();
        } else {
            bits.clear_all();
        }
    }
    for r in readers {
        r.join().unwrap();
    }
}
