//! # Contracts
//!
//! A contract is a named, fixed set of operation signatures. Contracts are
//! declared with [`define_contract!`](crate::define_contract), which produces
//! a zero-sized marker type implementing [`Contract`] plus one associated
//! function per operation that invokes through the instance's dispatch table.
//!
//! ```rust,ignore
//! define_contract! {
//!     /// Something that can produce text.
//!     pub contract Readable {
//!         fn read() -> String;
//!     }
//! }
//!
//! let text = Readable::read(&console)?;
//! ```

use std::any::{TypeId, type_name};
use std::fmt;

/// Parameter and return types of one declared operation.
///
/// Parameters are always described as a tuple: `()` for none, `(String,)`
/// for one, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    params: TypeId,
    ret: TypeId,
    params_name: &'static str,
    ret_name: &'static str,
}

impl Signature {
    /// Signature of an operation taking the tuple `A` and returning `R`.
    pub fn of<A: 'static, R: 'static>() -> Self {
        Self {
            params: TypeId::of::<A>(),
            ret: TypeId::of::<R>(),
            params_name: type_name::<A>(),
            ret_name: type_name::<R>(),
        }
    }

    /// Whether `other` has the same parameter and return types.
    pub fn matches(&self, other: &Signature) -> bool {
        self.params == other.params && self.ret == other.ret
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn{} -> {}", self.params_name, self.ret_name)
    }
}

/// A named set of operations a type may implement.
///
/// Implemented by the marker types that [`define_contract!`](crate::define_contract)
/// generates. Implementing it by hand is allowed; a name in `OPERATIONS` for
/// which `signature` returns `None` is treated as undeclared.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a contract",
    label = "not declared with `define_contract!`",
    note = "Declare contracts with `captable::define_contract!`."
)]
pub trait Contract: Send + Sync + 'static {
    /// Contract name, used in errors and logs.
    const NAME: &'static str;

    /// Declared operation names, in declaration order.
    const OPERATIONS: &'static [&'static str];

    /// Signature of a declared operation, `None` if undeclared.
    fn signature(operation: &str) -> Option<Signature>;
}

/// Whether every name in `operations` is distinct.
///
/// Evaluated in a `const` item by [`define_contract!`](crate::define_contract)
/// so duplicate operation names fail the build.
pub const fn operations_unique(operations: &[&str]) -> bool {
    let mut i = 0;
    while i < operations.len() {
        let mut j = i + 1;
        while j < operations.len() {
            if str_eq(operations[i], operations[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Declare a contract.
///
/// Generates a unit marker struct implementing [`Contract`] and, for every
/// operation, an associated function `Marker::op(&instance, args..)` that
/// resolves the call through the instance's [`DispatchTable`](crate::DispatchTable).
/// Operations without `->` return `()`.
///
/// # Example
/// ```
/// use captable_core::{Contract, define_contract};
///
/// define_contract! {
///     pub contract Writable {
///         fn write(message: String) -> std::io::Result<()>;
///     }
/// }
///
/// assert_eq!(Writable::NAME, "Writable");
/// assert_eq!(Writable::OPERATIONS, &["write"]);
/// ```
///
/// Two operations with the same name fail the build:
///
/// ```compile_fail
/// captable_core::define_contract! {
///     pub contract Dup {
///         fn read() -> String;
///         fn read() -> String;
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_contract {
    (
        $(#[$meta:meta])*
        $vis:vis contract $name:ident {
            $(
                $(#[$op_meta:meta])*
                fn $op:ident($($arg:ident : $ty:ty),* $(,)?) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        const _: () = assert!(
            $crate::contract::operations_unique(&[$(stringify!($op)),*]),
            concat!("duplicate operation name in contract `", stringify!($name), "`"),
        );

        impl $crate::Contract for $name {
            const NAME: &'static str = stringify!($name);
            const OPERATIONS: &'static [&'static str] = &[$(stringify!($op)),*];

            fn signature(operation: &str) -> ::core::option::Option<$crate::Signature> {
                match operation {
                    $(
                        stringify!($op) => ::core::option::Option::Some(
                            $crate::Signature::of::<($($ty,)*), $crate::__contract_ret!($($ret)?)>(),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $name {
            $(
                $(#[$op_meta])*
                #[allow(dead_code)]
                $vis fn $op<T>(instance: &T, $($arg: $ty),*) -> $crate::CapResult<$crate::__contract_ret!($($ret)?)>
                where
                    T: $crate::Implements<$name>,
                {
                    $crate::invoke(instance, $name, stringify!($op), ($($arg,)*))
                }
            )*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __contract_ret {
    () => { () };
    ($ret:ty) => { $ret };
}
