//! Serialize-then-parse fidelity of the data model.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use eeml_model::{Domain, Environment, Status};
    use eeml_xml::{CodecConfig, EemlDocument, from_eeml_with, to_eeml_with};

    use crate::complete_environment;

    #[test]
    fn test_should_populate_environment_from_eeml() {
        let original = complete_environment();
        let xml = original.to_eeml(None).expect("serialization should succeed");
        let env = Environment::from_eeml(&xml).expect("deserialization should succeed");

        assert_eq!(env.title(), Some("A Room Somewhere"));
        assert_eq!(env.feed(), Some("http://www.pachube.com/feeds/1.xml"));
        assert_eq!(env.status(), Some(Status::Frozen));
        assert_eq!(env.description(), Some("This is a room somewhere"));
        assert_eq!(env.icon(), Some("http://www.roomsomewhere/icon.png"));
        assert_eq!(env.website(), Some("http://www.roomsomewhere/"));
        assert_eq!(env.email(), Some("myemail@roomsomewhere"));
        assert_eq!(env.creator(), Some("http://www.haque.co.uk"));
        assert_eq!(env.id(), Some("1"));
        assert_eq!(
            env.updated_at(),
            Utc.with_ymd_and_hms(2007, 5, 4, 18, 13, 51).single()
        );
    }

    #[test]
    fn test_should_populate_location_from_eeml() {
        let xml = complete_environment()
            .to_eeml(None)
            .expect("serialization should succeed");
        let env = Environment::from_eeml(&xml).expect("deserialization should succeed");

        let location = env.location().expect("location present");
        assert_eq!(location.domain(), Domain::Physical);
        assert_eq!(location.name(), Some("My Room"));
        assert_eq!(location.exposure(), Some("indoor"));
        assert_eq!(location.disposition(), Some("fixed"));
        assert_eq!(location.lat(), Some(32.4));
        assert_eq!(location.lon(), Some(22.7));
        assert_eq!(location.ele(), Some(0.2));
    }

    #[test]
    fn test_should_populate_data_from_eeml() {
        let original = complete_environment();
        let xml = original.to_eeml(None).expect("serialization should succeed");
        let env = Environment::from_eeml(&xml).expect("deserialization should succeed");

        assert_eq!(env.len(), original.len());
        for (parsed, source) in env.iter().zip(original.iter()) {
            assert_eq!(parsed.tags()[0], source.tags()[0]);
            assert_eq!(parsed.value(), source.value());
            assert_eq!(parsed.tags(), source.tags());
            assert_eq!(parsed.max_value(), source.max_value());
            assert_eq!(parsed.min_value(), source.min_value());
            assert_eq!(parsed.unit(), source.unit());
        }

        // Positional ids become explicit ids once written out.
        let ids: Vec<_> = env.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![Some("0"), Some("1"), Some("2")]);
    }

    #[test]
    fn test_should_reproduce_document_after_roundtrip() {
        let config = CodecConfig::with_version("5");
        let first =
            to_eeml_with(&complete_environment(), &config).expect("serialization should succeed");
        let parsed = from_eeml_with(&first, &config).expect("deserialization should succeed");
        let second = to_eeml_with(&parsed, &config).expect("serialization should succeed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_should_roundtrip_in_strict_mode() {
        let config = CodecConfig {
            version: None,
            strict: true,
        };
        let xml =
            to_eeml_with(&complete_environment(), &config).expect("serialization should succeed");
        let env = from_eeml_with(&xml, &config).expect("deserialization should succeed");
        assert_eq!(env.len(), 3);
    }
}
