//! 注册引擎的集成测试

use autowire_common::{Candidate, ContractType, Lifetime, RegistrationError, TypeInfo};
use registry_abstractions::{CandidateSource, RegistrySink};
use registry_impl::{RegistrationManifest, ServiceRegistrar, ServiceRegistry};

/// 测试契约
trait UserService {}
trait AuditService {}

/// 测试实现
struct DefaultUserService;
struct BackupUserService;
struct FileAuditService;
struct DatabaseAuditService;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn duplicate_unkeyed_registrations_abort_the_batch() {
    init_tracing();
    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);

    // A (接口 X, 无键, Singleton) 然后 B (接口 X, 无键, Scoped)
    let first = Candidate::of::<DefaultUserService>()
        .with_interface(ContractType::of::<dyn UserService>())
        .with_lifetime(Lifetime::Singleton);
    let second = Candidate::of::<BackupUserService>()
        .with_interface(ContractType::of::<dyn UserService>())
        .with_lifetime(Lifetime::Scoped);

    registrar.register(&first).unwrap();
    let error = registrar.register(&second).unwrap_err();

    match error {
        RegistrationError::DuplicateRegistration {
            new_type,
            existing_type,
            contract,
            key,
        } => {
            assert_eq!(new_type, "BackupUserService");
            assert_eq!(existing_type, "DefaultUserService");
            assert_eq!(contract, "UserService");
            assert_eq!(key, "无");
        }
        other => panic!("意外的错误类型: {other:?}"),
    }

    // 首个注册保留
    assert_eq!(registry.len(), 1);
}

#[test]
fn distinct_keys_share_one_contract() {
    init_tracing();
    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);

    let candidates = vec![
        Candidate::of::<DefaultUserService>()
            .with_interface(ContractType::of::<dyn UserService>())
            .with_key("a"),
        Candidate::of::<BackupUserService>()
            .with_interface(ContractType::of::<dyn UserService>())
            .with_key("b"),
    ];

    registrar.register_all(&candidates).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry
        .iter()
        .all(|d| d.contract == ContractType::of::<dyn UserService>()));
    let keys: Vec<_> = registry.iter().map(|d| d.key.as_deref()).collect();
    assert_eq!(keys, vec![Some("a"), Some("b")]);
}

#[test]
fn manifest_registration_preserves_scan_order_and_reports_count() -> anyhow::Result<()> {
    init_tracing();
    let manifest = RegistrationManifest::new("billing-module")
        .add(
            Candidate::of::<DefaultUserService>()
                .with_interface(ContractType::of::<dyn UserService>()),
        )
        .add(
            Candidate::of::<FileAuditService>()
                .with_interface(ContractType::of::<dyn AuditService>())
                .with_lifetime(Lifetime::Transient),
        )
        .add(Candidate::of::<DatabaseAuditService>().keyed());

    assert_eq!(manifest.len(), 3);
    assert_eq!(manifest.name(), "billing-module");

    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);
    let report = registrar.register_from_source(&manifest)?;

    assert_eq!(report.registered, 3);
    assert_eq!(report.source, "billing-module");
    assert!(report.finished_at >= report.started_at);

    let implementations: Vec<_> = registry
        .iter()
        .map(|d| d.implementation.name.as_str())
        .collect();
    assert_eq!(
        implementations,
        vec![
            "DefaultUserService",
            "FileAuditService",
            "DatabaseAuditService"
        ]
    );
    Ok(())
}

#[test]
fn keyed_marker_registers_under_type_name() {
    init_tracing();
    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);

    let candidate = Candidate::of::<DatabaseAuditService>()
        .with_interface(ContractType::of::<dyn AuditService>())
        .with_key("ignored-text")
        .keyed();
    registrar.register(&candidate).unwrap();

    let descriptor = registry.iter().next().unwrap();
    assert_eq!(descriptor.key.as_deref(), Some("DatabaseAuditService"));
    assert_eq!(descriptor.contract, ContractType::of::<dyn AuditService>());
}

#[test]
fn keyed_and_plain_registrations_coexist_on_one_contract() {
    init_tracing();
    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);

    let candidates = vec![
        Candidate::of::<FileAuditService>().with_interface(ContractType::of::<dyn AuditService>()),
        Candidate::of::<DatabaseAuditService>()
            .with_interface(ContractType::of::<dyn AuditService>())
            .keyed(),
    ];

    assert_eq!(registrar.register_all(&candidates).unwrap(), 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn inferred_generic_contract_registers_as_unbound_definition() {
    init_tracing();
    struct User;
    struct UserRepository;

    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);

    let candidate = Candidate::of::<UserRepository>()
        .with_interface(ContractType::generic_of::<User>("Repository"));
    registrar.register(&candidate).unwrap();

    let descriptor = registry.iter().next().unwrap();
    assert_eq!(
        descriptor.contract,
        ContractType::generic_definition("Repository")
    );
}

#[test]
fn explicit_override_registers_without_normalization() {
    init_tracing();
    struct User;
    struct UserRepository;

    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);

    let explicit = ContractType::generic_of::<User>("Repository");
    let candidate = Candidate::of::<UserRepository>()
        .with_interface(ContractType::generic_of::<User>("Repository"))
        .with_contract(explicit.clone());
    registrar.register(&candidate).unwrap();

    assert_eq!(registry.iter().next().unwrap().contract, explicit);
}

#[test]
fn ambiguous_candidate_aborts_before_appending() {
    init_tracing();
    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);

    let candidate = Candidate::of::<DefaultUserService>()
        .with_interface(ContractType::of::<dyn UserService>())
        .with_interface(ContractType::of::<dyn AuditService>());

    let error = registrar.register(&candidate).unwrap_err();
    assert!(matches!(error, RegistrationError::AmbiguousContract { .. }));
    assert!(registry.is_empty());
}

#[test]
fn self_registration_for_type_without_direct_interfaces() {
    init_tracing();
    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);

    // 派生类型的接口全部继承自基类型
    let candidate = Candidate::of::<BackupUserService>()
        .with_interface(ContractType::of::<dyn UserService>())
        .with_base_interface(ContractType::of::<dyn UserService>());
    registrar.register(&candidate).unwrap();

    let descriptor = registry.iter().next().unwrap();
    assert_eq!(
        descriptor.contract,
        ContractType::of::<BackupUserService>()
    );
    assert_eq!(descriptor.implementation, TypeInfo::of::<BackupUserService>());
}

#[test]
fn registry_hand_off_exposes_descriptors_in_insertion_order() {
    init_tracing();
    let mut registry = ServiceRegistry::new();
    let mut registrar = ServiceRegistrar::new(&mut registry);

    registrar
        .register_all(&[
            Candidate::of::<DefaultUserService>()
                .with_interface(ContractType::of::<dyn UserService>()),
            Candidate::of::<FileAuditService>()
                .with_interface(ContractType::of::<dyn AuditService>()),
        ])
        .unwrap();

    // 移交宿主容器：以 RegistrySink 边界读取
    let sink: &dyn RegistrySink = &registry;
    assert_eq!(sink.descriptors().len(), 2);
    assert_eq!(
        sink.descriptors()[0].implementation,
        TypeInfo::of::<DefaultUserService>()
    );
}
