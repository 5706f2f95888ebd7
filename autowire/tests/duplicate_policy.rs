use autowire::prelude::*;
use autowire::{auto_service, service_impl};

trait Notifier {}

#[auto_service]
struct EmailNotifier;

#[service_impl]
impl Notifier for EmailNotifier {}

#[auto_service(services(dyn Notifier))]
struct SmsNotifier;

fn notifier() -> TypeKey {
    TypeKey::of::<dyn Notifier>()
}

#[test]
fn allow_policy_keeps_both_implementations() {
    let mut services = ServiceCollection::new();
    services.auto_wire_module(&autowire::current_module!()).unwrap();

    assert_eq!(services.descriptors_for(&notifier()).len(), 2);
}

#[test]
fn reject_policy_stops_at_second_implementation() {
    let mut services = ServiceCollection::new().with_duplicate_policy(DuplicatePolicy::Reject);
    let err = services
        .auto_wire_module(&autowire::current_module!())
        .unwrap_err();

    assert!(matches!(err, AutoWireError::AlreadyRegistered(_)));
    assert!(err.to_string().contains("Notifier"));
    // The registration made before the refusal is kept.
    assert_eq!(services.len(), 1);
}
