//! Basic (scalar) type kinds and their classification flags.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Classification flags for a [`BasicKind`].
    ///
    /// Flags compose: `int8` is `INTEGER | NUMERIC | ORDERED`, `uint16`
    /// adds `UNSIGNED`, `complex128` is `COMPLEX | NUMERIC` but not
    /// `ORDERED` (complex values admit equality, never `<`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KindInfo: u16 {
        const BOOLEAN  = 1 << 0;
        const INTEGER  = 1 << 1;
        const UNSIGNED = 1 << 2;
        const FLOAT    = 1 << 3;
        const COMPLEX  = 1 << 4;
        const STRING   = 1 << 5;
        const ORDERED  = 1 << 6;

        const NUMERIC = Self::INTEGER.bits() | Self::FLOAT.bits() | Self::COMPLEX.bits();
    }
}

/// The concrete backing shape of a scalar type.
///
/// `Int`, `Uint`, and `Uintptr` are the platform-default kinds; the
/// checker treats them as 64-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
}

impl BasicKind {
    /// Get the source-level name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            BasicKind::Bool => "bool",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Complex64 => "complex64",
            BasicKind::Complex128 => "complex128",
            BasicKind::String => "string",
        }
    }

    /// Get the classification flags for this kind.
    pub const fn info(self) -> KindInfo {
        match self {
            BasicKind::Bool => KindInfo::BOOLEAN,
            BasicKind::Int | BasicKind::Int8 | BasicKind::Int16 | BasicKind::Int32
            | BasicKind::Int64 => KindInfo::INTEGER.union(KindInfo::ORDERED),
            BasicKind::Uint | BasicKind::Uint8 | BasicKind::Uint16 | BasicKind::Uint32
            | BasicKind::Uint64 | BasicKind::Uintptr => KindInfo::INTEGER
                .union(KindInfo::UNSIGNED)
                .union(KindInfo::ORDERED),
            BasicKind::Float32 | BasicKind::Float64 => {
                KindInfo::FLOAT.union(KindInfo::ORDERED)
            }
            BasicKind::Complex64 | BasicKind::Complex128 => KindInfo::COMPLEX,
            BasicKind::String => KindInfo::STRING.union(KindInfo::ORDERED),
        }
    }

    /// Width in bits for integer kinds; the platform-default kinds
    /// (`int`, `uint`, `uintptr`) count as 64-bit.
    pub const fn bit_size(self) -> Option<u32> {
        match self {
            BasicKind::Int8 | BasicKind::Uint8 => Some(8),
            BasicKind::Int16 | BasicKind::Uint16 => Some(16),
            BasicKind::Int32 | BasicKind::Uint32 => Some(32),
            BasicKind::Int | BasicKind::Int64 | BasicKind::Uint | BasicKind::Uint64
            | BasicKind::Uintptr => Some(64),
            _ => None,
        }
    }

    /// Promotion rank for untyped-constant widening. Higher rank = wider
    /// kind; coercion between two untyped numeric constants adopts the
    /// higher-ranked kind and never narrows. `None` for non-numeric kinds.
    pub const fn promotion_rank(self) -> Option<u8> {
        match self {
            BasicKind::Int => Some(2),
            BasicKind::Int8 => Some(3),
            BasicKind::Int16 => Some(4),
            BasicKind::Int32 => Some(5),
            BasicKind::Int64 => Some(6),
            BasicKind::Uint => Some(7),
            BasicKind::Uint8 => Some(8),
            BasicKind::Uint16 => Some(9),
            BasicKind::Uint32 => Some(10),
            BasicKind::Uint64 => Some(11),
            BasicKind::Uintptr => Some(12),
            BasicKind::Float32 => Some(13),
            BasicKind::Float64 => Some(14),
            BasicKind::Complex64 => Some(15),
            BasicKind::Complex128 => Some(16),
            BasicKind::Bool | BasicKind::String => None,
        }
    }

    /// Whether this kind is numeric (integer, float, or complex).
    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.info().intersects(KindInfo::NUMERIC)
    }

    /// Whether this kind is an integer kind (signed or unsigned).
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.info().contains(KindInfo::INTEGER)
    }

    /// Whether this kind is an unsigned integer kind.
    #[inline]
    pub const fn is_unsigned(self) -> bool {
        self.info().contains(KindInfo::UNSIGNED)
    }

    /// Whether this kind is a floating-point kind.
    #[inline]
    pub const fn is_float(self) -> bool {
        self.info().contains(KindInfo::FLOAT)
    }

    /// Whether this kind is a complex kind.
    #[inline]
    pub const fn is_complex(self) -> bool {
        self.info().contains(KindInfo::COMPLEX)
    }

    /// Whether values of this kind support the ordering operators.
    #[inline]
    pub const fn is_ordered(self) -> bool {
        self.info().contains(KindInfo::ORDERED)
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_classification() {
        assert!(BasicKind::Int8.is_integer());
        assert!(BasicKind::Int8.is_numeric());
        assert!(!BasicKind::Int8.is_unsigned());
        assert!(BasicKind::Uint16.is_unsigned());
        assert!(BasicKind::Uintptr.is_integer());
        assert!(!BasicKind::Float32.is_integer());
    }

    #[test]
    fn complex_is_numeric_but_not_ordered() {
        assert!(BasicKind::Complex128.is_numeric());
        assert!(!BasicKind::Complex128.is_ordered());
        assert!(BasicKind::String.is_ordered());
        assert!(!BasicKind::Bool.is_ordered());
    }

    #[test]
    fn platform_kinds_are_64_bit() {
        assert_eq!(BasicKind::Int.bit_size(), Some(64));
        assert_eq!(BasicKind::Uint.bit_size(), Some(64));
        assert_eq!(BasicKind::Uintptr.bit_size(), Some(64));
        assert_eq!(BasicKind::Int8.bit_size(), Some(8));
        assert_eq!(BasicKind::Uint32.bit_size(), Some(32));
        assert_eq!(BasicKind::Float64.bit_size(), None);
    }

    #[test]
    fn promotion_rank_widens() {
        let int = BasicKind::Int.promotion_rank().unwrap();
        let rune = BasicKind::Int32.promotion_rank().unwrap();
        let float = BasicKind::Float64.promotion_rank().unwrap();
        let complex = BasicKind::Complex128.promotion_rank().unwrap();
        assert!(int < rune);
        assert!(rune < float);
        assert!(float < complex);
        assert_eq!(BasicKind::String.promotion_rank(), None);
    }
}
