// End-to-end scenarios over the public API.

use hink::{Dictionary, Entry, Error, Guid, Pair, Queue, Record, Stack, Tuple};

#[derive(Clone, Debug, PartialEq)]
enum Item {
    Object(&'static str, i32),
    List(Vec<i32>),
    Number(i32),
    Text(&'static str),
}

fn items() -> Vec<Item> {
    vec![
        Item::Object("a", 123),
        Item::List(vec![3, 2, 1]),
        Item::Number(1),
        Item::Number(2),
        Item::Number(3),
        Item::Text("a"),
        Item::Text("b"),
        Item::Text("c"),
    ]
}

#[test]
fn dictionary_lifecycle() {
    let first = Pair::new("testKey1", 1);
    let second = Pair::new("testKey2", 2);

    let mut dict = Dictionary::new([
        Entry::from(first.clone()),
        Entry::from(Record::new("testKey2", 2)),
        Entry::from(vec![Pair::new("testKey3", 3)]),
    ])
    .unwrap();
    assert_eq!(dict.count(), 3);

    // set never inserts
    assert_eq!(dict.set("absent", 9), None);
    assert_eq!(dict.count(), 3);
    assert_eq!(dict.get("absent"), None);

    // put inserts at the end
    assert_eq!(dict.put("testKey4", 4), None);
    assert_eq!(dict.count(), 4);
    assert_eq!(dict.get("testKey4"), Some(&4));

    // add refuses what is already there
    assert_eq!(dict.add(first), Err(Error::DuplicateKey));

    let mut removed = Vec::new();
    dict.remove_with("testKey2", |pair| removed.push(pair));
    assert_eq!(removed, [second.clone()]);
    assert!(removed[0].equal(&second));
    assert_eq!(dict.count(), 3);

    let keys: Vec<_> = dict.keys().copied().collect();
    assert_eq!(keys, ["testKey1", "testKey3", "testKey4"]);
    let values: Vec<_> = dict.values().copied().collect();
    assert_eq!(values, [1, 3, 4]);
}

#[test]
fn dictionary_construction_is_all_or_nothing() {
    let bad = Record {
        key: Some("k"),
        value: None::<i32>,
    };

    let result = Dictionary::new([Entry::from(Pair::new("ok", 1)), Entry::from(bad)]);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn tuple_capacity_and_bounds() {
    let mut t = Tuple::new(2, [Item::Object("a", 123)]).unwrap();
    assert_eq!(t.data().len(), 2);

    t.add(Item::Object("b", 234)).unwrap();
    assert_eq!(
        t.add(Item::Object("c", 345)),
        Err(Error::CapacityExceeded { limit: 2 })
    );
    assert!(matches!(t.get(2), Err(Error::IndexOutOfBounds { .. })));
    assert!(matches!(
        t.put(2, Item::Number(0)),
        Err(Error::IndexOutOfBounds { .. })
    ));

    assert!(matches!(
        Tuple::<Item>::with_limit(0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn stack_is_lifo_and_depletes() {
    let data = items();
    let mut stack: Stack<Item> = data.iter().cloned().collect();

    let mut counter = data.len();
    stack.deplete(|s, item| {
        counter -= 1;
        assert_eq!(s.len(), counter);
        assert_eq!(item, data[counter]);
    });
    assert_eq!(counter, 0);
    assert!(stack.data().is_empty());
    assert_eq!(stack.pop(), None);
}

#[test]
fn queue_is_fifo_and_depletes() {
    let data = items();
    let mut queue = Queue::from(data.clone());

    let mut counter = 0;
    queue.deplete(|q, item| {
        assert_eq!(q.len(), data.len() - counter - 1);
        assert_eq!(item, data[counter]);
        counter += 1;
    });
    assert_eq!(counter, data.len());
    assert!(queue.is_empty());
    assert_eq!(queue.deq(), None);
}

#[test]
fn guid_seeded_generation_is_reproducible() {
    hink::rand::seed_from([21; 32]);
    let a = Guid::new();
    hink::rand::seed_from([21; 32]);
    let b = Guid::new();

    assert!(a.equals(&b));
    assert_eq!(a.to_string().parse::<Guid>(), Ok(b));
    assert!(!Guid::new().equals(&a));
    assert_eq!(Guid::EMPTY.value_of(), "0".repeat(32));
}
