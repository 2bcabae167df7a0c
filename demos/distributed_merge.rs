extern crate percentile;
#[macro_use]
extern crate trackable;

use percentile::{default_registry, Role};
use percentile::value::Value;

fn main() {
    let function = default_registry().get("percentile").expect("Never fails");
    println!("# {}", function.syntax());

    // Three nodes, each holding a shard of the rows.
    let shards = vec![
        vec![Value::Integer(12), Value::Null, Value::Float(3.5)],
        vec![Value::from(vec![7i64, 1, 20]), Value::from("n/a")],
        vec![],
    ];
    let mut partials = Vec::new();
    for (i, rows) in shards.into_iter().enumerate() {
        let mut acc = function.create_accumulator();
        for row in rows {
            track_try_unwrap!(acc.observe(&[row, Value::from("0.9")]));
        }
        let partial = track_try_unwrap!(acc.finalize(Role::Producer));
        println!("node{}: {}", i, partial);
        partials.push(partial);
    }

    let mut coordinator = function.create_accumulator();
    track_try_unwrap!(coordinator.observe(&[Value::Null, Value::from("0.9")]));
    let result = track_try_unwrap!(coordinator.merge(&partials));
    println!("percentile(0.9) = {}", result);
}
