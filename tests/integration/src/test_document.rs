//! Exact document output for the reference EEML examples.

#[cfg(test)]
mod tests {
    use eeml_model::{Data, Environment};
    use eeml_xml::EemlDocument;

    use crate::{complete_environment, init_tracing};

    const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?><eeml xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns="http://www.eeml.org/xsd/005" xsi:schemaLocation="http://www.eeml.org/xsd/005 http://www.eeml.org/xsd/005/005.xsd"><environment><data id="0"><value>36.2</value></data></environment></eeml>"#;

    const MINIMAL_ID_42: &str = r#"<?xml version="1.0" encoding="UTF-8"?><eeml xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns="http://www.eeml.org/xsd/005" xsi:schemaLocation="http://www.eeml.org/xsd/005 http://www.eeml.org/xsd/005/005.xsd"><environment><data id="42"><value>36.2</value></data></environment></eeml>"#;

    const COMPLETE: &str = r#"<?xml version="1.0" encoding="UTF-8"?><eeml version="5" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns="http://www.eeml.org/xsd/005" xsi:schemaLocation="http://www.eeml.org/xsd/005 http://www.eeml.org/xsd/005/005.xsd"><environment updated="2007-05-04T18:13:51Z" creator="http://www.haque.co.uk" id="1"><title>A Room Somewhere</title><feed>http://www.pachube.com/feeds/1.xml</feed><status>frozen</status><description>This is a room somewhere</description><icon>http://www.roomsomewhere/icon.png</icon><website>http://www.roomsomewhere/</website><email>myemail@roomsomewhere</email><location domain="physical" exposure="indoor" disposition="fixed"><name>My Room</name><lat>32.4</lat><lon>22.7</lon><ele>0.2</ele></location><data id="0"><tag>temperature</tag><value maxValue="48.0" minValue="23.0">36.2</value><unit type="derivedSI" symbol="C">Celsius</unit></data><data id="1"><tag>blush</tag><tag>redness</tag><tag>embarrassment</tag><value maxValue="100.0" minValue="0.0">84.0</value><unit type="contextDependentUnits">blushesPerHour</unit></data><data id="2"><tag>length</tag><tag>distance</tag><tag>extension</tag><value minValue="0.0">12.3</value><unit type="basicSI" symbol="m">meter</unit></data></environment></eeml>"#;

    #[test]
    fn test_should_generate_minimal_document() {
        init_tracing();
        let mut env = Environment::new();
        env.push(Data::new(36.2));
        let xml = env.to_eeml(None).expect("serialization should succeed");
        assert_eq!(xml, MINIMAL);
    }

    #[test]
    fn test_should_generate_minimal_document_with_explicit_id() {
        init_tracing();
        let mut env = Environment::new();
        env.push(Data::with_id(36.2, 42));
        let xml = env.to_eeml(None).expect("serialization should succeed");
        assert_eq!(xml, MINIMAL_ID_42);
    }

    #[test]
    fn test_should_generate_complete_document() {
        let env = complete_environment();
        let xml = env.to_eeml(Some("5")).expect("serialization should succeed");
        assert_eq!(xml, COMPLETE);
    }

    #[test]
    fn test_should_refuse_empty_environment_whatever_its_metadata() {
        let mut env = complete_environment();
        while !env.is_empty() {
            env.remove(0);
        }
        let err = env.to_eeml(Some("5")).unwrap_err();
        assert!(err.is_no_data());
        assert_eq!(err.to_string(), "EEML requires at least one data item");

        let err = Environment::new().to_eeml(None).unwrap_err();
        assert!(err.is_no_data());
    }

    #[test]
    fn test_should_parse_minimal_document_with_any_namespace_order() {
        init_tracing();
        let reordered = r#"<?xml version="1.0" encoding="UTF-8"?><eeml xmlns="http://www.eeml.org/xsd/005" xsi:schemaLocation="http://www.eeml.org/xsd/005 http://www.eeml.org/xsd/005/005.xsd" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><environment><data id="0"><value>36.2</value></data></environment></eeml>"#;

        for xml in [MINIMAL, reordered] {
            let env = Environment::from_eeml(xml).expect("deserialization should succeed");
            assert_eq!(env.len(), 1);
            assert!((env[0].value() - 36.2).abs() < 1e-9);
        }
    }
}
