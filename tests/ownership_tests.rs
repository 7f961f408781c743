use anybox::{AnyBox, BoxError};
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn test_clone_is_deep() -> Result<(), BoxError> {
    let original = AnyBox::new("abc".to_string());
    let copy = original.clone();

    // Same value, distinct storage
    assert_eq!(original.get::<String>()?, copy.get::<String>()?);
    assert!(!std::ptr::eq(
        original.get::<String>()?,
        copy.get::<String>()?
    ));
    assert_ne!(
        original.get::<String>()?.as_ptr(),
        copy.get::<String>()?.as_ptr()
    );
    Ok(())
}

#[test]
fn test_clone_independence() -> Result<(), BoxError> {
    let mut original = AnyBox::new(vec![1, 2, 3]);
    let copy = original.clone();

    // Mutating the original never affects the copy
    original.get_mut::<Vec<i32>>()?.push(4);
    assert_eq!(copy.get::<Vec<i32>>()?, &vec![1, 2, 3]);

    // Clearing one leaves the other holding
    let second = copy.clone();
    drop(copy);
    assert_eq!(second.get::<Vec<i32>>()?, &vec![1, 2, 3]);

    // The string scenario: copy, clear the copy, original unaffected
    let original = AnyBox::new("abc".to_string());
    let mut copy = original.clone();
    copy.clear();
    assert!(copy.is_empty());
    assert_eq!(original.get::<String>()?, "abc");
    Ok(())
}

#[test]
fn test_clone_of_empty_is_empty() {
    let original = AnyBox::empty();
    let copy = original.clone();
    assert!(copy.is_empty());
}

#[test]
fn test_take_empties_source_without_copying() -> Result<(), BoxError> {
    let payload = "x".repeat(100_000);
    let backing = payload.as_ptr();

    let mut a = AnyBox::new(payload);
    let mut b = a.take();

    assert!(a.is_empty());
    assert_eq!(b.get::<String>()?.len(), 100_000);
    // The buffer itself never moved
    assert_eq!(b.get::<String>()?.as_ptr(), backing);

    // Moving the value out of the box keeps the same buffer too
    let out: String = b.take_value()?;
    assert!(b.is_empty());
    assert_eq!(out.as_ptr(), backing);
    Ok(())
}

#[test]
fn test_swap_exchanges_handles_only() -> Result<(), BoxError> {
    let str1 = "a".repeat(1_000_000);
    let str2 = "b".repeat(500_000);
    let backing2 = str2.as_ptr();

    let mut a = AnyBox::new(str1.clone());
    let mut b = AnyBox::new(str2);

    // A large number of swaps stays cheap because only handles move
    for _ in 0..100_001 {
        a.swap(&mut b);
        b.swap(&mut a);
        a.swap(&mut b);
    }

    assert_eq!(a.get::<String>()?.len(), 500_000);
    assert_eq!(b.get::<String>()?, &str1);
    assert_eq!(a.get::<String>()?.as_ptr(), backing2);
    Ok(())
}

#[test]
fn test_swap_with_empty_moves_emptiness() -> Result<(), BoxError> {
    let mut a = AnyBox::empty();
    let mut b = AnyBox::new(vec![1, 2]);

    a.swap(&mut b);
    assert_eq!(a.get::<Vec<i32>>()?, &vec![1, 2]);
    assert!(b.is_empty());

    a.clear();
    a.swap(&mut b);
    assert!(a.is_empty());
    assert!(b.is_empty());
    Ok(())
}

#[test]
fn test_reassignment_through_alias() -> Result<(), BoxError> {
    // The closest expressible form of self-assignment: overwriting a box
    // with a clone of itself reached through the same reference
    let mut a = AnyBox::new(vec![0i32; 100_000]);
    let r = &mut a;
    for _ in 0..1_000 {
        *r = r.clone();
    }
    assert_eq!(a.get::<Vec<i32>>()?.len(), 100_000);

    // And on an empty box it stays empty
    let mut b = AnyBox::empty();
    let rb = &mut b;
    *rb = rb.clone();
    assert!(b.is_empty());
    Ok(())
}

#[test]
fn test_clone_from_preserves_target_on_panic() -> Result<(), BoxError> {
    #[derive(Debug)]
    struct PanicOnClone;
    impl Clone for PanicOnClone {
        fn clone(&self) -> Self {
            panic!("clone refused");
        }
    }

    // Constructing moves the value, so no clone happens yet
    let source = AnyBox::new(PanicOnClone);
    let mut target = AnyBox::new(41i32);

    let result = catch_unwind(AssertUnwindSafe(|| {
        target.clone_from(&source);
    }));
    assert!(result.is_err());

    // The failed copy never touched the target's prior state
    assert_eq!(target.get::<i32>()?, &41);
    Ok(())
}

#[test]
fn test_nested_boxes_to_depth_1000() -> Result<(), BoxError> {
    #[derive(Clone)]
    struct Layer {
        inner: AnyBox,
    }

    const DEPTH: usize = 1_000;

    let mut a = AnyBox::new(5i32);
    for _ in 0..DEPTH {
        a = AnyBox::new(Layer { inner: a.take() });
    }
    let mut b = a.clone();

    // Unwind by reference and clone
    for _ in 0..DEPTH {
        a = a.get::<Layer>()?.inner.clone();
    }
    assert_eq!(a.get::<i32>()?, &5);

    // Unwind by consuming move
    for _ in 0..DEPTH {
        b = b.into_value::<Layer>()?.inner;
    }
    assert_eq!(b.into_value::<i32>()?, 5);
    Ok(())
}

#[test]
fn test_vector_of_boxes_round_trips() -> Result<(), BoxError> {
    const COUNT: i32 = 10_000;

    let mut boxes = Vec::new();
    for i in 0..COUNT {
        boxes.push(AnyBox::new(i));
        let copy = boxes
            .last()
            .map(AnyBox::clone)
            .unwrap_or_else(AnyBox::empty);
        boxes.push(copy);
        boxes.push(AnyBox::new(3.14f64));
        boxes.push(AnyBox::new(true));
    }

    let copies = boxes.clone();
    for i in 0..COUNT {
        let base = (i as usize) * 4;
        assert_eq!(copies[base].get::<i32>()?, &i);
        assert_eq!(copies[base + 1].get::<i32>()?, &i);
        assert_eq!(copies[base + 2].get::<f64>()?, &3.14);
        assert_eq!(copies[base + 3].get::<bool>()?, &true);
    }
    Ok(())
}
