use anyhow::{Result, ensure};
use simplevec::SimpleVector;
use simplevec_testkit::data_gen::{OpGenerator, VecOp};

pub fn run(count: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    log::info!("stress: {count} operations, seed {seed}");

    let mut generator = OpGenerator::new(seed);
    let mut v = SimpleVector::<i64>::new();
    let mut model = Vec::<i64>::new();
    let mut reallocations = 0usize;

    for step in 0..count {
        let op = generator.next_op(model.len());
        let old_capacity = v.capacity();
        apply(&mut v, &mut model, op);

        if v.capacity() != old_capacity {
            reallocations += 1;
            log::debug!(
                "step {step}: {op:?} moved capacity {old_capacity} -> {}",
                v.capacity()
            );
        }
        ensure!(
            v.len() <= v.capacity(),
            "step {step}: len {} exceeds capacity {}",
            v.len(),
            v.capacity()
        );
        ensure!(
            v.as_slice() == model.as_slice(),
            "step {step}: contents diverged from Vec after {op:?}"
        );
    }

    println!(
        "stress ... ok ({count} operations, final len {}, capacity {}, {reallocations} reallocations)",
        v.len(),
        v.capacity()
    );
    Ok(())
}

fn apply(v: &mut SimpleVector<i64>, model: &mut Vec<i64>, op: VecOp) {
    match op {
        VecOp::PushBack(value) => {
            v.push_back(value);
            model.push(value);
        }
        VecOp::Insert { index, value } => {
            v.insert(index, value);
            model.insert(index, value);
        }
        VecOp::Erase { index } => {
            v.erase(index);
            model.remove(index);
        }
        VecOp::PopBack => {
            v.pop_back();
            model.pop();
        }
        VecOp::Clear => {
            v.clear();
            model.clear();
        }
        VecOp::Resize(len) => {
            v.resize(len);
            model.resize(len, 0);
        }
        VecOp::Reserve(capacity) => v.reserve(capacity),
    }
}
