use chaintable::hash_map::{additive_hash, positional_hash};
use chaintable::{find_mode, ChainedHashMap, DynamicArray, Result};

fn main() -> Result<()> {
    chaintable::init();
    println!("=== chaintable demo ===\n");

    println!("1. Growth while inserting 150 keys (additive hash, 53 buckets):");
    let mut map = ChainedHashMap::with_capacity_and_hasher(53, additive_hash);
    for i in 0..150 {
        map.put(format!("str{}", i), i * 100);
        if i % 25 == 24 {
            println!(
                "   empty={} load={:.2} size={} capacity={}",
                map.empty_buckets(),
                map.table_load(),
                map.size(),
                map.capacity()
            );
        }
    }

    println!("\n2. Repeated keys (positional hash, 41 buckets):");
    let mut map = ChainedHashMap::with_capacity_and_hasher(41, positional_hash);
    for i in 0..50 {
        map.put(format!("str{}", i / 3), i * 100);
        if i % 10 == 9 {
            println!(
                "   empty={} load={:.2} size={} capacity={}",
                map.empty_buckets(),
                map.table_load(),
                map.size(),
                map.capacity()
            );
        }
    }

    println!("\n3. Explicit resizes:");
    let mut map = ChainedHashMap::with_capacity_and_hasher(75, positional_hash);
    let keys: Vec<u32> = (1..1000).step_by(13).collect();
    for &key in &keys {
        map.put(key.to_string(), key * 42);
    }
    println!("   size={} capacity={}", map.size(), map.capacity());
    for capacity in (111..1000).step_by(117) {
        map.resize_table(capacity);
        let all_present = keys.iter().all(|key| map.contains_key(&key.to_string()));
        println!(
            "   requested={} ok={} size={} capacity={} load={:.2}",
            capacity,
            all_present,
            map.size(),
            map.capacity(),
            map.table_load()
        );
    }

    println!("\n4. Shrinking below the entry count:");
    let mut map = ChainedHashMap::with_capacity_and_hasher(11, positional_hash);
    for i in 1..6 {
        map.put(i.to_string(), (i * 10).to_string());
    }
    println!("   before: {:?}", map.get_keys_and_values());
    map.put("20", "200".to_string());
    map.remove("1");
    map.resize_table(2);
    println!("   after resize_table(2): {:?}", map.get_keys_and_values());
    println!("   capacity={}", map.capacity());
    print!("{}", map);

    println!("\n5. Clear:");
    let mut map = ChainedHashMap::with_capacity_and_hasher(53, additive_hash);
    map.put("key1", 10);
    map.put("key2", 20);
    map.resize_table(100);
    println!("   size={} capacity={}", map.size(), map.capacity());
    map.clear();
    println!("   size={} capacity={}", map.size(), map.capacity());

    println!("\n6. Mode finding:");
    let cases: [&[&str]; 4] = [
        &["apple", "apple", "grape", "melon", "peach"],
        &["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu"],
        &["one", "two", "three", "four", "five"],
        &["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"],
    ];
    for case in cases {
        let input: DynamicArray<&str> = case.iter().copied().collect();
        let (modes, frequency) = find_mode(case);
        println!("   Input: {}", input);
        println!("   Mode : {}, Frequency: {}\n", modes, frequency);
    }

    println!("Demo completed successfully!");
    Ok(())
}
