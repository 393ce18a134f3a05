mod common;

use common::ScriptedAllocator;
use zvec::{Element, Vector, ZVec};

#[derive(Debug, PartialEq, Clone, Copy)]
struct Point {
    x: i32,
    y: i32,
}

impl Element for Point {
    const SIZE: usize = 8;

    fn write_bytes(&self, out: &mut [u8]) {
        self.x.write_bytes(&mut out[..4]);
        self.y.write_bytes(&mut out[4..]);
    }

    fn read_bytes(bytes: &[u8]) -> Self {
        Point {
            x: i32::read_bytes(&bytes[..4]),
            y: i32::read_bytes(&bytes[4..]),
        }
    }
}

#[test]
fn test_push_and_get() {
    let mut vector = Vector::new();

    for i in 0..8u64 {
        vector.push(i * i).unwrap();
    }

    assert_eq!(vector.len(), 8);
    assert_eq!(vector.get(3), Some(9));
    assert_eq!(vector.get(8), None);
    assert_eq!(vector.to_vec(), [0, 1, 4, 9, 16, 25, 36, 49]);
}

#[test]
fn test_from_slice_and_set() {
    let mut vector = Vector::from_slice(&[1.5f64, 2.5, 3.5]).unwrap();

    assert!(vector.set(1, -2.0));
    assert!(!vector.set(3, 0.0));
    assert_eq!(vector.to_vec(), [1.5, -2.0, 3.5]);
}

#[test]
fn test_struct_elements() {
    let mut vector = Vector::new();
    vector.push(Point { x: 1, y: 2 }).unwrap();
    vector.push(Point { x: 3, y: 4 }).unwrap();
    vector.insert(1, Point { x: 5, y: 6 }).unwrap();

    assert_eq!(
        vector.to_vec(),
        [Point { x: 1, y: 2 }, Point { x: 5, y: 6 }, Point { x: 3, y: 4 }]
    );
    assert_eq!(vector.as_raw().as_bytes(Point::SIZE).len(), 24);

    let found = vector.find(|p| p.x == 3);
    assert_eq!(found, Some(2));
}

#[test]
fn test_array_elements() {
    let vector = Vector::from_slice(&[[1u16, 2, 3], [4, 5, 6]]).unwrap();

    assert_eq!(<[u16; 3]>::SIZE, 6);
    assert_eq!(vector.get(1), Some([4, 5, 6]));
}

#[test]
fn test_remove_pop_and_pop_front() {
    let mut vector = Vector::from_slice(&[10i32, 20, 30, 40, 50]).unwrap();

    assert_eq!(vector.remove(1), Some(20));
    assert_eq!(vector.remove(10), None);
    assert_eq!(vector.pop(), Some(50));
    assert_eq!(vector.pop_front(), Some(10));
    assert_eq!(vector.to_vec(), [30, 40]);

    assert_eq!(vector.pop(), Some(40));
    assert_eq!(vector.pop(), Some(30));
    assert_eq!(vector.pop(), None);
    assert_eq!(vector.pop_front(), None);
    assert!(vector.is_empty());
}

#[test]
fn test_extend_and_truncate() {
    let mut vector: Vector<u8> = Vector::default();

    vector.extend_from_slice(b"hello world").unwrap();
    assert_eq!(vector.len(), 11);

    vector.truncate(5);
    assert_eq!(vector.to_vec(), b"hello");
}

#[test]
fn test_capacity_management() {
    let mut vector: Vector<u32> = Vector::with_capacity(4).unwrap();
    assert_eq!(vector.capacity(), 4);

    vector.ensure(20).unwrap();
    assert_eq!(vector.capacity(), 32);

    vector.push(7).unwrap();
    vector.shrink();
    assert_eq!(vector.capacity(), 1);

    vector.resize(0).unwrap();
    assert!(vector.is_empty());
}

#[test]
fn test_duplicate_and_equality() {
    let vector = Vector::from_slice(&[1i16, 2, 3]).unwrap();
    let mut copy = vector.duplicate().unwrap();

    assert_eq!(copy, vector);
    copy.push(4).unwrap();
    assert_ne!(copy, vector);
    assert_eq!(vector.to_vec(), [1, 2, 3]);
}

#[test]
fn test_float_equality_is_by_value() {
    let a = Vector::from_slice(&[0.0f32]).unwrap();
    let b = Vector::from_slice(&[-0.0f32]).unwrap();

    assert_eq!(a, b);
    assert!(a.as_raw().not_equals(b.as_raw(), 4));
}

#[test]
fn test_sort_search_and_reorder() {
    let mut vector = Vector::from_slice(&[2i32, 4, 6, 8, 10, 12]).unwrap();

    vector.move_element(2, 4);
    assert_eq!(vector.to_vec(), [2, 4, 10, 6, 8, 12]);

    vector.move_element(4, 2);
    assert_eq!(vector.to_vec(), [2, 4, 6, 8, 10, 12]);

    vector.swap(0, 5);
    vector.sort_by(|a, b| b.cmp(&a));
    assert_eq!(vector.to_vec(), [12, 10, 8, 6, 4, 2]);

    assert_eq!(vector.search_by(|x| 6i32.cmp(&x)), Some(3));
    assert_eq!(vector.search_by(|x| 7i32.cmp(&x)), None);
    assert_eq!(vector.find_last(|x| x > 5), Some(3));
}

#[test]
fn test_raw_round_trip() {
    let raw = ZVec::import(&[1, 0, 2, 0], 2, 2).unwrap();
    let vector: Vector<u16> = Vector::from_raw(raw);

    assert_eq!(vector.to_vec(), [u16::from_ne_bytes([1, 0]), u16::from_ne_bytes([2, 0])]);
    assert_eq!(vector.into_raw().len(), 2);
}

#[test]
fn test_debug_lists_elements() {
    let vector = Vector::from_slice(&[1u8, 2, 3]).unwrap();

    assert_eq!(format!("{vector:?}"), "[1, 2, 3]");
}

#[test]
fn test_single_byte_elements() {
    let mut vector: Vector<[u8; 1]> = Vector::new();

    vector.push([7]).unwrap();
    vector.insert(0, [3]).unwrap();
    vector.extend_from_slice(&[[9], [1]]).unwrap();
    assert_eq!(vector.to_vec(), [[3], [7], [9], [1]]);
    assert_eq!(vector.as_raw().as_bytes(1), &[3, 7, 9, 1]);
}

#[test]
fn test_zero_sized_array_element_bytes() {
    let empty: [[u8; 0]; 3] = [[]; 3];
    let mut out = [0u8; 0];

    assert_eq!(<[[u8; 0]; 3]>::SIZE, 0);
    empty.write_bytes(&mut out);
    assert_eq!(<[[u8; 0]; 3]>::read_bytes(&out), empty);
}

#[test]
fn test_push_allocates_only_through_buffer_allocator() {
    let alloc = ScriptedAllocator::new();
    let mut vector: Vector<u32, ScriptedAllocator> = Vector::from_raw(ZVec::new_in(alloc.clone()));

    vector.push(1).unwrap();
    vector.extend_from_slice(&[2, 3]).unwrap();
    vector.shrink();
    assert_eq!(alloc.reallocations(), 3);
    assert_eq!(alloc.allocations(), 0);

    alloc.script(&[true, true]);
    assert!(vector.push(4).is_err());
    alloc.script(&[true, true]);
    assert!(vector.insert(0, 0).is_err());
    alloc.script(&[true, true]);
    assert!(vector.extend_from_slice(&[4, 5, 6]).is_err());
    assert_eq!(vector.to_vec(), [1, 2, 3]);
    assert_eq!(vector.capacity(), 3);
}

#[test]
fn test_from_slice_has_exact_capacity() {
    let vector = Vector::from_slice(&[5u16, 6, 7]).unwrap();

    assert_eq!(vector.capacity(), 3);
    assert_eq!(vector.to_vec(), [5, 6, 7]);
}
