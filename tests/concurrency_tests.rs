use sharded_maps::{ShardedConcurrentMap, ShardedConcurrentMultiMap};
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_inserts() {
    let map = Arc::new(ShardedConcurrentMap::new());
    let mut handles = vec![];

    // Spawn 10 threads, each inserting 100 items
    for thread_id in 0..10 {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for i in 0..100 {
                let key = format!("thread_{}_key_{}", thread_id, i);
                map.set(key, i);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.len(), 1000);
}

#[test]
fn test_concurrent_reads() {
    let map = Arc::new(ShardedConcurrentMap::new());

    for i in 0..100 {
        map.set(format!("key_{}", i), i);
    }

    let mut handles = vec![];

    // Spawn 20 threads, each reading all items
    for _ in 0..20 {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for i in 0..100 {
                let key = format!("key_{}", i);
                let value = map.get(&key).unwrap();
                assert_eq!(*value, i);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_disjoint_set_get_remove_no_lost_updates() {
    const THREADS: usize = 8;
    const OPS: usize = 10_000;

    let map = Arc::new(ShardedConcurrentMap::new());
    let mut handles = vec![];

    for t in 0..THREADS {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for i in 0..OPS {
                let key = format!("t{}_k{}", t, i);
                map.set(key.clone(), i);
                assert_eq!(*map.get(&key).unwrap(), i);

                // Overwrite, then drop every third key
                map.set(key.clone(), i * 2);
                if i % 3 == 0 {
                    map.remove(&key);
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let kept_per_thread = (0..OPS).filter(|i| i % 3 != 0).count();
    assert_eq!(map.len(), THREADS * kept_per_thread);

    for t in 0..THREADS {
        for i in 0..OPS {
            let key = format!("t{}_k{}", t, i);
            if i % 3 == 0 {
                assert!(!map.contains(&key));
            } else {
                assert_eq!(*map.get(&key).unwrap(), i * 2);
            }
        }
    }
}

#[test]
fn test_concurrent_appends_same_key() {
    const THREADS: usize = 8;
    const APPENDS: usize = 1_000;

    let map = Arc::new(ShardedConcurrentMultiMap::new());
    let mut handles = vec![];

    for t in 0..THREADS {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for i in 0..APPENDS {
                map.append("shared", (t, i));
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let values = map.get("shared").unwrap();
    assert_eq!(values.len(), THREADS * APPENDS);

    // Each thread's own appends keep their relative order
    for t in 0..THREADS {
        let own: Vec<usize> = values
            .iter()
            .filter(|(thread, _)| *thread == t)
            .map(|(_, i)| *i)
            .collect();
        assert_eq!(own, (0..APPENDS).collect::<Vec<_>>());
    }
}

#[test]
fn test_readers_hold_views_during_appends() {
    let map = Arc::new(ShardedConcurrentMultiMap::new());
    map.set("k", vec![0usize]);

    let writer = {
        let map = Arc::clone(&map);
        thread::spawn(move || {
            for i in 1..=2_000 {
                map.append("k", i);
            }
        })
    };

    let reader = {
        let map = Arc::clone(&map);
        thread::spawn(move || {
            for _ in 0..2_000 {
                let view = map.get("k").unwrap();
                let len = view.len();
                // A view is a prefix that never changes once handed out
                assert!(view.iter().copied().eq(0..len));
                assert_eq!(view.len(), len);
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(map.get("k").unwrap().len(), 2_001);
}

#[test]
fn test_concurrent_mixed_operations() {
    let map = Arc::new(ShardedConcurrentMap::new());
    let mut handles = vec![];

    // Spawn writers
    for thread_id in 0..5 {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for i in 0..100 {
                let key = format!("key_{}_{}", thread_id, i);
                map.set(key, i);
            }
        });
        handles.push(handle);
    }

    // Spawn readers
    for _ in 0..5 {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for _ in 0..200 {
                for i in 0..10 {
                    let key = format!("key_{}_{}", i % 5, i);
                    map.get(&key); // May or may not exist, that's ok
                }
                assert!(map.len() <= 500);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.len(), 500);
}
