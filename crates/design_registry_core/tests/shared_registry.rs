use design_registry_core::{DesignContent, Principal, RegistryError, SharedDesignRegistry};
use std::collections::BTreeSet;
use std::thread;

fn content(label: &str) -> DesignContent {
    DesignContent::new(label, "shelter", "Hurricane", "Storm shutters", "Steel")
}

#[test]
fn concurrent_registers_issue_unique_contiguous_ids() {
    let registry = SharedDesignRegistry::new();
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let registry = registry.clone();
            thread::spawn(move || {
                let caller = Principal::new(format!("worker-{worker}"));
                (0..25)
                    .map(|i| registry.register(&caller, content(&format!("{worker}-{i}")), i))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "id {id} issued twice");
        }
    }

    assert_eq!(ids.len(), 200);
    assert_eq!(ids.iter().next().copied(), Some(1));
    assert_eq!(ids.iter().last().copied(), Some(200));
    assert_eq!(registry.last_design_id(), 200);
    assert_eq!(registry.len(), 200);
}

#[test]
fn concurrent_updates_respect_ownership() {
    let registry = SharedDesignRegistry::new();
    let owner = Principal::from("owner");
    let id = registry.register(&owner, content("original"), 1);

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let registry = registry.clone();
            thread::spawn(move || {
                let caller = Principal::new(format!("intruder-{worker}"));
                registry.update(&caller, id, content("hijacked"))
            })
        })
        .collect();

    for handle in handles {
        let err = handle.join().unwrap().unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { .. }));
    }

    assert_eq!(registry.get(id).unwrap().content.name, "original");
    assert_eq!(registry.update(&owner, id, content("revised")), Ok(id));
    assert_eq!(registry.get(id).unwrap().content.name, "revised");
}

#[test]
fn snapshot_is_independent_of_later_mutations() {
    let registry = SharedDesignRegistry::new();
    assert!(registry.is_empty());
    let owner = Principal::from("owner");
    registry.register(&owner, content("first"), 1);
    assert!(!registry.is_empty());

    let snapshot = registry.snapshot();
    registry.register(&owner, content("second"), 2);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(registry.len(), 2);
    assert!(registry.contains(2));
    assert!(!snapshot.contains(2));
}
