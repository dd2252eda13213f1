//! Property tests for the stack's ordering and boundary behaviour.

use bounded_stack::{BoundedStack, StackError};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<i32>().prop_map(Op::Push), Just(Op::Pop)]
}

proptest! {
    #[test]
    fn fresh_stack_is_empty(capacity in 0usize..64) {
        let stack: BoundedStack<i32> = BoundedStack::new(capacity);
        prop_assert!(stack.is_empty());
        prop_assert_eq!(stack.is_full(), capacity == 0);
    }

    #[test]
    fn pops_come_back_in_reverse_order(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let mut stack = BoundedStack::new(values.len());
        for v in &values {
            stack.push(*v).unwrap();
        }
        prop_assert!(stack.is_full());

        for expected in values.iter().rev() {
            prop_assert_eq!(stack.top(), Ok(*expected));
            prop_assert_eq!(stack.pop(), Ok(*expected));
        }
        prop_assert_eq!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn matches_vec_model(capacity in 0usize..8, ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut stack = BoundedStack::new(capacity);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    let result = stack.push(v);
                    if model.len() == capacity {
                        prop_assert_eq!(result, Err(StackError::Overflow { capacity }));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        model.push(v);
                    }
                }
                Op::Pop => match model.pop() {
                    Some(v) => {
                        prop_assert_eq!(stack.pop(), Ok(v));
                    }
                    None => {
                        prop_assert_eq!(stack.pop(), Err(StackError::Underflow));
                    }
                },
            }

            prop_assert!(stack.len() <= stack.capacity());
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.capacity(), capacity);
            prop_assert_eq!(stack.top().ok(), model.last().copied());
        }
    }

    #[test]
    fn clone_survives_mutation_of_source(values in prop::collection::vec(any::<i32>(), 1..16)) {
        let mut source = BoundedStack::new(values.len());
        for v in &values {
            source.push(*v).unwrap();
        }
        let copy = source.clone();

        while source.pop().is_ok() {}

        prop_assert_eq!(copy.len(), values.len());
        prop_assert_eq!(copy.top(), Ok(*values.last().unwrap()));
    }
}

#[test]
fn test_overflow_example() {
    let mut stack = BoundedStack::new(2);
    stack.push(1).unwrap();
    stack.push(2).unwrap();

    assert_eq!(stack.push(3), Err(StackError::Overflow { capacity: 2 }));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.top(), Ok(2));
}

#[test]
fn test_underflow_example() {
    let mut stack: BoundedStack<i32> = BoundedStack::new(3);

    assert_eq!(stack.pop(), Err(StackError::Underflow));
    assert_eq!(stack.top(), Err(StackError::Underflow));
}
