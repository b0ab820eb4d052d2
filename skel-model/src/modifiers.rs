//! Access and storage modifiers.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier set attached to classes and members.
    ///
    /// Serialized as a `|`-separated list of flag names, e.g. `"PUBLIC | STATIC"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u32 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const SYNCHRONIZED = 1 << 5;
        const VOLATILE = 1 << 6;
        const TRANSIENT = 1 << 7;
        const NATIVE = 1 << 8;
        const ABSTRACT = 1 << 9;
        /// Compiler-generated member with no source counterpart.
        const SYNTHETIC = 1 << 10;
    }
}

impl Modifiers {
    /// Modifiers that can be rendered as Java keywords, in keyword order.
    ///
    /// `final`, `volatile`, `transient` and `native` are never printed, so
    /// class fields need no initializer. Interface fields are implicitly
    /// final and get one from the printer.
    pub const PRINTABLE: [(Modifiers, &'static str); 6] = [
        (Modifiers::PUBLIC, "public"),
        (Modifiers::PROTECTED, "protected"),
        (Modifiers::PRIVATE, "private"),
        (Modifiers::STATIC, "static"),
        (Modifiers::SYNCHRONIZED, "synchronized"),
        (Modifiers::ABSTRACT, "abstract"),
    ];

    pub fn is_public(&self) -> bool {
        self.contains(Self::PUBLIC)
    }

    pub fn is_protected(&self) -> bool {
        self.contains(Self::PROTECTED)
    }

    pub fn is_private(&self) -> bool {
        self.contains(Self::PRIVATE)
    }

    pub fn is_static(&self) -> bool {
        self.contains(Self::STATIC)
    }

    pub fn is_abstract(&self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    pub fn is_synthetic(&self) -> bool {
        self.contains(Self::SYNTHETIC)
    }

    /// Keywords for the printable subset of this set.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        Self::PRINTABLE
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| *keyword)
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}
