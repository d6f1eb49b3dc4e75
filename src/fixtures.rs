#[cfg(test)]
pub mod test {
    use std::sync::mpsc::{self, Sender};

    use crate::document::Document;
    use crate::schema::{Bind, Field};

    pub const SAMPLE_INI: &str = "\
; sample document covering every field kind
[Default]
k1 = 1
k2 = 2
k3 = 3
k4 = 4
k5 = five
k6 = yes
k7 = a
k7 = b
k7 = c
k8 = 10
k8 = 20
k8 = 30

[HTTP]
ip = 127.0.0.1
port = 8080

[tcp]
ip = 0.0.0.0
port = 9000
";

    pub fn sample_document() -> Document {
        SAMPLE_INI.parse().unwrap()
    }

    /// Whole-document destination: one field per section.
    #[derive(Debug, Default, PartialEq)]
    pub struct TestConfig {
        pub defaults: Defaults,
        pub http: Http,
        pub tcp: Option<Tcp>,
        pub scratch: Http,
        pub label: String,
    }

    impl Bind for TestConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::nested("Default", &mut self.defaults),
                Field::nested("HTTP", &mut self.http),
                Field::nested("TCP", &mut self.tcp).key("tcp"),
                Field::nested("Scratch", &mut self.scratch).skip(),
                Field::read_only("Derived"),
                Field::new("Label", &mut self.label),
            ]
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Defaults {
        pub k1: isize,
        pub k2: i32,
        pub k3: i64,
        pub k4: u32,
        pub k5: String,
        pub k6: bool,
        pub k7: Vec<String>,
        pub k8: Vec<i64>,
        pub k9: String,
        pub cache: String,
    }

    impl Bind for Defaults {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("K1", &mut self.k1).key("k1"),
                Field::new("K2", &mut self.k2).key("k2"),
                Field::new("K3", &mut self.k3).key("k3"),
                Field::new("K4", &mut self.k4).key("k4"),
                Field::new("K5", &mut self.k5).key("k5"),
                Field::new("K6", &mut self.k6).key("k6"),
                Field::new("K7", &mut self.k7).key("k7"),
                Field::new("K8", &mut self.k8).key("k8"),
                Field::new("K9", &mut self.k9).key("k9"),
                Field::new("Cache", &mut self.cache).skip(),
            ]
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Http {
        pub ip: String,
        pub port: String,
    }

    impl Http {
        pub fn address(&self) -> String {
            format!("{}:{}", self.ip, self.port)
        }
    }

    impl Bind for Http {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("ip", &mut self.ip),
                Field::new("port", &mut self.port),
            ]
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Tcp {
        pub ip: String,
        pub port: u16,
    }

    impl Tcp {
        pub fn address(&self) -> String {
            format!("{}:{}", self.ip, self.port)
        }
    }

    impl Bind for Tcp {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("IP", &mut self.ip).key("ip"),
                Field::new("Port", &mut self.port).key("port"),
                Field::read_only("Address").key("address"),
            ]
        }
    }

    // -- Fixture for unsupported field kinds ------------------------------------

    /// A section struct holding a channel and a nested struct, neither of which
    /// can take an option value.
    pub struct Notifier {
        pub name: String,
        pub notify: Sender<String>,
        pub inner: Http,
    }

    impl Notifier {
        pub fn new() -> Self {
            let (notify, _) = mpsc::channel();
            Self {
                name: String::new(),
                notify,
                inner: Http::default(),
            }
        }
    }

    impl Default for Notifier {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Bind for Notifier {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("name", &mut self.name),
                Field::new("Notify", &mut self.notify).key("notify"),
                Field::nested("Inner", &mut self.inner),
            ]
        }
    }

    #[derive(Default)]
    pub struct HookedConfig {
        pub http: Http,
        pub hooks: Notifier,
        pub tcp: Option<Tcp>,
    }

    impl Bind for HookedConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::nested("HTTP", &mut self.http),
                Field::nested("Hooks", &mut self.hooks),
                Field::nested("tcp", &mut self.tcp),
            ]
        }
    }

    #[test]
    fn sample_document_has_expected_sections() {
        let doc = sample_document();
        let names: Vec<&str> = doc.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Default", "HTTP", "tcp"]);
        assert_eq!(doc.section("Default").unwrap().len(), 8);
    }
}
