//! Model-level behaviour observed through the public API.

#[cfg(test)]
mod tests {
    use eeml_model::{Data, EemlError, Environment, Location, Status};
    use eeml_xml::EemlDocument;

    use crate::init_tracing;

    #[test]
    fn test_should_hand_out_the_appended_item() {
        init_tracing();
        let mut env = Environment::new();
        let data = Data::new(36.2).with_tag("temperature");
        env.push(data.clone());
        assert_eq!(env.len(), 1);
        assert_eq!(env[0], data);
        assert!(std::ptr::eq(&env[0], env.get(0).expect("item present")));
    }

    #[test]
    fn test_should_keep_status_on_rejected_assignment() {
        let mut env = Environment::new();
        env.set_status(Status::Frozen);
        assert_eq!(env.status(), Some(Status::Frozen));
        env.set_status(Status::Live);
        assert_eq!(env.status(), Some(Status::Live));

        let err = env.set_status_str("gibber").unwrap_err();
        assert!(matches!(err, EemlError::Validation(_)));
        assert_eq!(env.status(), Some(Status::Live));
    }

    #[test]
    fn test_should_reject_location_with_unknown_domain() {
        assert!(matches!(
            Location::parse("cheese"),
            Err(EemlError::Validation(_))
        ));
    }

    #[test]
    fn test_should_compute_fallback_ids_at_serialization_time() {
        let mut env = Environment::new();
        env.push(Data::new(1.0));
        env.push(Data::new(2.0));
        env.push(Data::new(3.0));

        let xml = env.to_eeml(None).expect("serialization should succeed");
        assert!(xml.contains(r#"<data id="2"><value>3.0</value></data>"#));

        env.remove(1);
        let xml = env.to_eeml(None).expect("serialization should succeed");
        assert!(xml.contains(r#"<data id="1"><value>3.0</value></data>"#));
        assert!(env.iter().all(|d| d.id().is_none()));
    }
}
