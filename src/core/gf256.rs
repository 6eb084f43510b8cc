//! GF(2^8) arithmetic module.
//!
//! Finite field arithmetic over GF(2^8) with the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B), the same field AES uses.
//!
//! # Design Choices
//! - **Bit-Serial Core**: [`mul_bitwise`] is an 8-iteration shift/conditional-reduce loop with
//!   mask-based conditionals, so it never branches on operand values.
//! - **Lazy Tables**: the inverse table (256 bytes) and the optional product table (64 KiB) are
//!   built once on first use behind a `OnceLock` and are read-only afterwards. Both may be shared
//!   across threads.
//! - **Two Engines**: [`BitSerial`] recomputes every product, [`ProductTable`] looks it up.
//!   They must agree on all 65536 input pairs. Table lookups are indexed by operand values and
//!   are therefore not cache-timing neutral; the bit-serial engine is.
//!
//! # Usage
//! ```
//! use gf256_sharing::core::gf256::GF256;
//!
//! let a = GF256(0x57);
//! let b = GF256(0x83);
//! assert_eq!(a * b, GF256(0xC1));
//! assert_eq!(a * a.inv(), GF256(1));
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign};
use std::sync::OnceLock;

use zeroize::DefaultIsZeroes;

/// Low byte of the irreducible polynomial (full poly: 0x11B).
const POLY: u8 = 0x1B;

/// Number of entries in the full product table (every `(a, b)` pair).
pub const PRODUCT_TABLE_LEN: usize = 1 << 16;

static INVERSES: OnceLock<[u8; 256]> = OnceLock::new();
static PRODUCTS: OnceLock<ProductTable> = OnceLock::new();

/// The finite field element type, wrapping a u8.
///
/// Every byte is a valid element, so there is no validation on construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct GF256(pub u8);

impl GF256 {
    pub const ZERO: GF256 = GF256(0);
    pub const ONE: GF256 = GF256(1);

    /// Multiplicative inverse, read from the lazily built inverse table.
    ///
    /// Returns 0 for 0 (convention; the interpolation code never inverts zero
    /// once duplicate identifiers are rejected).
    ///
    /// # Safety Guarantees
    /// - Thread-safe: the table is immutable once built.
    /// - Not cache-timing neutral: the lookup is indexed by the operand.
    ///
    /// # Failure Modes
    /// - None; the first call builds the table.
    #[inline]
    pub fn inv(self) -> Self {
        GF256(inverse_table()[self.0 as usize])
    }
}

impl DefaultIsZeroes for GF256 {}

impl From<u8> for GF256 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        GF256(value)
    }
}

impl From<GF256> for u8 {
    #[inline(always)]
    fn from(gf: GF256) -> u8 {
        gf.0
    }
}

/// GF(2^8) addition: XOR, as the field has characteristic 2.
///
/// Subtraction is the same operation.
impl Add for GF256 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        GF256(self.0 ^ rhs.0)
    }
}

impl AddAssign for GF256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// GF(2^8) multiplication through the bit-serial routine.
///
/// Operator use never touches the product table, so it is safe to call from
/// code that builds the tables.
impl Mul for GF256 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        GF256(mul_bitwise(self.0, rhs.0))
    }
}

impl MulAssign for GF256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Carry-less multiplication of `a` and `b` reduced modulo 0x11B.
///
/// # Safety Guarantees
/// - Constant-time: fixed 8 iterations; conditionals are expressed as masks.
/// - Thread-safe: no shared state.
///
/// # Failure Modes
/// - None; closed under the domain.
#[inline(always)]
pub const fn mul_bitwise(a: u8, b: u8) -> u8 {
    let mut acc: u8 = 0;
    let mut x = a;
    let mut y = b;
    let mut i = 0;
    while i < 8 {
        // acc ^= x if the low bit of y is set
        acc ^= x & (y & 1).wrapping_neg();
        // 0xFF if x overflows on the shift, 0x00 otherwise
        let carry = (x >> 7).wrapping_neg();
        x = (x << 1) ^ (POLY & carry);
        y >>= 1;
        i += 1;
    }
    acc
}

/// Returns the process-wide inverse table, building it on first call.
///
/// Built by testing all 256 x 256 pairs and recording, for each nonzero `a`, the
/// `b` with `a * b == 1`. Entry 0 stays 0.
///
/// # Safety Guarantees
/// - Built exactly once per process, even under concurrent first use.
///
/// # Failure Modes
/// - None.
pub fn inverse_table() -> &'static [u8; 256] {
    INVERSES.get_or_init(|| {
        log::debug!("building GF(2^8) inverse table");
        let mut inv = [0u8; 256];
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                if mul_bitwise(a, b) == 1 {
                    inv[a as usize] = b;
                }
            }
        }
        inv
    })
}

/// Returns the process-wide product table, building it on first call.
///
/// # Safety Guarantees
/// - Built exactly once per process; read-only afterwards.
///
/// # Failure Modes
/// - None. The first call allocates 64 KiB.
pub fn product_table() -> &'static ProductTable {
    PRODUCTS.get_or_init(ProductTable::build)
}

/// The two basic field operations the sharing algorithms need.
///
/// Implementations must satisfy the field laws for every input; in particular
/// `mul(a, inv(a)) == 1` for all nonzero `a` and `inv(0) == 0`.
pub trait FieldArithmetic {
    fn mul(&self, a: GF256, b: GF256) -> GF256;

    fn inv(&self, a: GF256) -> GF256;
}

/// Table-free engine: every product is recomputed with [`mul_bitwise`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitSerial;

impl FieldArithmetic for BitSerial {
    #[inline(always)]
    fn mul(&self, a: GF256, b: GF256) -> GF256 {
        GF256(mul_bitwise(a.0, b.0))
    }

    #[inline(always)]
    fn inv(&self, a: GF256) -> GF256 {
        a.inv()
    }
}

/// Flat table of all 65536 products, indexed by `(a << 8) | b`.
pub struct ProductTable {
    products: Box<[u8]>,
}

impl ProductTable {
    fn build() -> Self {
        log::debug!("building GF(2^8) product table ({} entries)", PRODUCT_TABLE_LEN);
        let mut products = vec![0u8; PRODUCT_TABLE_LEN].into_boxed_slice();
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                products[((a as usize) << 8) | b as usize] = mul_bitwise(a, b);
            }
        }
        Self { products }
    }

    /// Product of `a` and `b`.
    ///
    /// # Safety Guarantees
    /// - Thread-safe: shared read-only data.
    /// - Not cache-timing neutral; use [`BitSerial`] where that matters.
    ///
    /// # Failure Modes
    /// - None; every `(a, b)` index is in bounds.
    #[inline(always)]
    pub fn get(&self, a: u8, b: u8) -> u8 {
        self.products[((a as usize) << 8) | b as usize]
    }
}

impl fmt::Debug for ProductTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductTable")
            .field("len", &self.products.len())
            .finish()
    }
}

impl FieldArithmetic for ProductTable {
    #[inline(always)]
    fn mul(&self, a: GF256, b: GF256) -> GF256 {
        GF256(self.get(a.0, b.0))
    }

    #[inline(always)]
    fn inv(&self, a: GF256) -> GF256 {
        a.inv()
    }
}

/// Which multiplication engine a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticMode {
    /// O(1) lookups into the shared 64 KiB product table.
    Table,
    /// Bit-serial multiplication, no product table.
    BitSerial,
}

impl Default for ArithmeticMode {
    fn default() -> Self {
        if cfg!(feature = "gf256-table") {
            ArithmeticMode::Table
        } else {
            ArithmeticMode::BitSerial
        }
    }
}

/// A resolved engine: either a handle to the shared product table or the bit-serial routine.
#[derive(Debug, Clone, Copy)]
pub enum Engine {
    Table(&'static ProductTable),
    BitSerial(BitSerial),
}

impl Engine {
    /// Resolves `mode`, building the product table if this is its first use.
    ///
    /// # Failure Modes
    /// - None; both modes always resolve.
    pub fn new(mode: ArithmeticMode) -> Self {
        match mode {
            ArithmeticMode::Table => Engine::Table(product_table()),
            ArithmeticMode::BitSerial => Engine::BitSerial(BitSerial),
        }
    }

    pub fn mode(&self) -> ArithmeticMode {
        match self {
            Engine::Table(_) => ArithmeticMode::Table,
            Engine::BitSerial(_) => ArithmeticMode::BitSerial,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(ArithmeticMode::default())
    }
}

impl FieldArithmetic for Engine {
    #[inline(always)]
    fn mul(&self, a: GF256, b: GF256) -> GF256 {
        match self {
            Engine::Table(table) => table.mul(a, b),
            Engine::BitSerial(bits) => bits.mul(a, b),
        }
    }

    #[inline(always)]
    fn inv(&self, a: GF256) -> GF256 {
        a.inv()
    }
}
