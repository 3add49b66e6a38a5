//! Named usage scenarios for `SimpleVector`, run by the `run` command.

use anyhow::{Result, ensure};
use simplevec::{SimpleVector, reserve, simple_vector};
use simplevec_testkit::builders::{generate_noncopyable, generate_vector};
use simplevec_testkit::{CopyTally, NonCopyable};

pub struct Scenario {
    pub name: &'static str,
    pub run: fn() -> Result<()>,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "basic",
        run: basic,
    },
    Scenario {
        name: "extended",
        run: extended,
    },
    Scenario {
        name: "reserve-constructor",
        run: reserve_constructor,
    },
    Scenario {
        name: "reserve-method",
        run: reserve_method,
    },
    Scenario {
        name: "temporary-constructor",
        run: temporary_constructor,
    },
    Scenario {
        name: "temporary-assign",
        run: temporary_assign,
    },
    Scenario {
        name: "named-move-constructor",
        run: named_move_constructor,
    },
    Scenario {
        name: "named-move-assign",
        run: named_move_assign,
    },
    Scenario {
        name: "noncopyable-move-constructor",
        run: noncopyable_move_constructor,
    },
    Scenario {
        name: "noncopyable-push-back",
        run: noncopyable_push_back,
    },
    Scenario {
        name: "noncopyable-insert",
        run: noncopyable_insert,
    },
    Scenario {
        name: "noncopyable-erase",
        run: noncopyable_erase,
    },
];

const LARGE: usize = 1_000_000;

/// Construction, checked access, clear and resize.
fn basic() -> Result<()> {
    let v = SimpleVector::<i32>::new();
    ensure!(v.is_empty() && v.capacity() == 0, "default vector is not empty");

    let v = SimpleVector::<i32>::with_size(5);
    ensure!(v.len() == 5 && v.capacity() == 5, "sized vector: {v:?}");
    ensure!(v.iter().all(|&x| x == 0), "sized vector is not zero-filled");

    let v = SimpleVector::from_elem(3, &42);
    ensure!(v.iter().all(|&x| x == 42), "filled vector: {v:?}");

    let mut v = simple_vector![1, 2, 3];
    ensure!(v.at(2).is_ok_and(|&x| x == 3), "at(2) returned the wrong element");
    match v.at(3) {
        Ok(x) => anyhow::bail!("at(3) returned {x} on a vector of 3"),
        Err(e) => log::debug!("at(3) failed as expected: {e}"),
    }

    let capacity = v.capacity();
    v.clear();
    ensure!(v.is_empty() && v.capacity() == capacity, "clear changed capacity");

    v.resize(7);
    ensure!(v.len() == 7 && v.capacity() >= 7, "resize: {v:?}");
    v.resize(4);
    ensure!(v.len() == 4, "shrinking resize: {v:?}");
    Ok(())
}

/// Appending, copying, swapping, comparison, insert and erase.
fn extended() -> Result<()> {
    let mut v = simple_vector![42];
    v.push_back(88);
    ensure!(v.as_slice() == &[42, 88], "push_back: {v:?}");

    let copy = v.clone();
    ensure!(copy == v && copy.as_ptr() != v.as_ptr(), "clone is not a deep copy");

    let mut v = simple_vector![0, 1, 2, 3];
    let begin = v.as_ptr();
    v.pop_back();
    ensure!(v == simple_vector![0, 1, 2] && v.as_ptr() == begin, "pop_back: {v:?}");

    let mut a = simple_vector![42, 666];
    let mut b = simple_vector![0, 1, 2];
    let (pa, pb) = (a.as_ptr(), b.as_ptr());
    a.swap(&mut b);
    ensure!(a.as_ptr() == pb && b.as_ptr() == pa, "swap moved elements");

    ensure!(simple_vector![1, 2, 3] < simple_vector![1, 2, 3, 1], "prefix ordering");
    ensure!(simple_vector![1, 2, 3] > simple_vector![1, 2, 2, 1], "element ordering");
    ensure!(simple_vector![1, 2, 3] <= simple_vector![1, 2, 3], "reflexive <=");

    let mut v = simple_vector![1, 2, 3, 4];
    v.insert(2, 42);
    ensure!(v == simple_vector![1, 2, 42, 3, 4], "insert: {v:?}");
    v.erase(2);
    ensure!(v == simple_vector![1, 2, 3, 4], "erase: {v:?}");

    let tally = CopyTally::new();
    let mut tracked = SimpleVector::new();
    for i in 0..100 {
        tracked.push_back(tally.track(i));
    }
    ensure!(tally.copies() == 0, "growth copied {} elements", tally.copies());
    Ok(())
}

fn reserve_constructor() -> Result<()> {
    let v: SimpleVector<i32> = SimpleVector::from(reserve(5));
    ensure!(v.capacity() == 5 && v.is_empty(), "reserved vector: {v:?}");
    Ok(())
}

fn reserve_method() -> Result<()> {
    let mut v = SimpleVector::<i32>::new();
    v.reserve(5);
    ensure!(v.capacity() == 5 && v.is_empty(), "reserve(5): {v:?}");

    v.reserve(1);
    ensure!(v.capacity() == 5, "reserve shrank the capacity");

    for i in 0..10 {
        v.push_back(i);
    }
    v.reserve(100);
    ensure!(v.capacity() == 100, "reserve(100): capacity {}", v.capacity());
    ensure!(v.iter().copied().eq(0..10), "reserve lost elements: {v:?}");
    Ok(())
}

fn temporary_constructor() -> Result<()> {
    let v = generate_vector(LARGE);
    ensure!(v.len() == LARGE, "len {}", v.len());
    Ok(())
}

fn temporary_assign() -> Result<()> {
    let mut v = SimpleVector::new();
    ensure!(v.is_empty(), "new vector is not empty");
    v = generate_vector(LARGE);
    ensure!(v.len() == LARGE, "len {}", v.len());
    Ok(())
}

fn named_move_constructor() -> Result<()> {
    let mut source = generate_vector(LARGE);
    let moved = std::mem::take(&mut source);
    ensure!(moved.len() == LARGE, "moved len {}", moved.len());
    ensure!(source.is_empty() && source.capacity() == 0, "source not emptied");
    Ok(())
}

fn named_move_assign() -> Result<()> {
    let mut source = generate_vector(LARGE);
    let mut moved = simple_vector![1, 2, 3];
    ensure!(moved.len() == 3, "initial len {}", moved.len());
    moved = std::mem::take(&mut source);
    ensure!(moved.len() == LARGE, "moved len {}", moved.len());
    ensure!(source.is_empty(), "source not emptied");
    Ok(())
}

fn noncopyable_move_constructor() -> Result<()> {
    let mut source = generate_noncopyable(5);
    let moved = std::mem::take(&mut source);
    ensure!(moved.len() == 5 && source.is_empty(), "move did not transfer");
    ensure!(
        moved.iter().map(NonCopyable::value).eq(0..5),
        "moved elements out of order"
    );
    Ok(())
}

fn noncopyable_push_back() -> Result<()> {
    let v = generate_noncopyable(5);
    ensure!(
        v.iter().map(NonCopyable::value).eq(0..5),
        "pushed elements out of order"
    );
    Ok(())
}

fn noncopyable_insert() -> Result<()> {
    let size = 5;
    let mut v = generate_noncopyable(size);

    v.insert(0, NonCopyable::new(size + 1));
    ensure!(v[0].value() == size + 1, "insert at the beginning");

    let end = v.len();
    v.insert(end, NonCopyable::new(size + 2));
    ensure!(v[v.len() - 1].value() == size + 2, "insert at the end");

    v.insert(3, NonCopyable::new(size + 3));
    ensure!(v[3].value() == size + 3, "insert in the middle");
    ensure!(v.len() == size + 3, "len {}", v.len());
    Ok(())
}

fn noncopyable_erase() -> Result<()> {
    let mut v = generate_noncopyable(3);
    let next = v.erase(0).map(|x| x.value());
    ensure!(next == Some(1), "erase returned {next:?}");
    Ok(())
}
