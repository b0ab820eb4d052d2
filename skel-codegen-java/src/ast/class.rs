//! Java type declaration headers.

/// Builder for the opening line of a class, interface or enum.
#[derive(Debug, Clone)]
pub struct ClassHeader {
    modifiers: Vec<&'static str>,
    keyword: &'static str,
    name: String,
    generics: String,
    extends: Option<String>,
    interfaces_keyword: &'static str,
    interfaces: Vec<String>,
}

impl ClassHeader {
    /// `keyword` is `class`, `interface` or `enum`.
    pub fn new(keyword: &'static str, name: impl Into<String>) -> Self {
        let interfaces_keyword = if keyword == "interface" {
            "extends"
        } else {
            "implements"
        };
        Self {
            modifiers: Vec::new(),
            keyword,
            name: name.into(),
            generics: String::new(),
            extends: None,
            interfaces_keyword,
            interfaces: Vec::new(),
        }
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = &'static str>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Rendered generic parameter list, `<...>`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = generics.into();
        self
    }

    pub fn extends(mut self, super_class: impl Into<String>) -> Self {
        self.extends = Some(super_class.into());
        self
    }

    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// The header line, ending with the opening brace.
    pub fn build(&self) -> String {
        let mut line = super::modifier_prefix(&self.modifiers);
        line.push_str(self.keyword);
        line.push(' ');
        line.push_str(&self.name);
        line.push_str(&self.generics);
        if let Some(super_class) = &self.extends {
            line.push_str(" extends ");
            line.push_str(super_class);
        }
        if !self.interfaces.is_empty() {
            line.push(' ');
            line.push_str(self.interfaces_keyword);
            line.push(' ');
            line.push_str(&self.interfaces.join(", "));
        }
        line.push_str(" {");
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_header() {
        let header = ClassHeader::new("class", "Pt")
            .modifiers(["public"])
            .generics("<T>")
            .extends("geo.Base")
            .interface("java.io.Serializable")
            .interface("java.lang.Cloneable")
            .build();
        assert_eq!(
            header,
            "public class Pt<T> extends geo.Base implements java.io.Serializable, java.lang.Cloneable {"
        );
    }

    #[test]
    fn test_interface_extends_interfaces() {
        let header = ClassHeader::new("interface", "Shape")
            .interface("geo.Named")
            .build();
        assert_eq!(header, "interface Shape extends geo.Named {");
    }
}
