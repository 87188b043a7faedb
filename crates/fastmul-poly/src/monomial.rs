//! Exponent vectors.
//!
//! A monomial is one non-negative exponent per ring variable. Vectors of up
//! to four variables live inline; larger rings spill to the heap.

use std::cmp::Ordering;

use smallvec::SmallVec;

/// Inline storage for exponent vectors.
pub type Exponents = SmallVec<[u32; 4]>;

/// An exponent vector `x_0^e_0 * ... * x_{n-1}^e_{n-1}`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(Exponents);

impl Monomial {
    /// Creates the monomial 1 (all exponents zero).
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self(SmallVec::from_elem(0, num_vars))
    }

    /// Creates the monomial x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable {i} out of range for {num_vars} variables");
        let mut m = Self::one(num_vars);
        m.0[i] = 1;
        m
    }

    /// Creates a monomial from exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self(SmallVec::from_slice(exps))
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Returns the exponent of variable i.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.0[i]
    }

    /// Overwrites the exponent of variable i.
    pub fn set_exponent(&mut self, i: usize, e: u32) {
        self.0[i] = e;
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.0.iter().map(|&e| u64::from(e)).sum()
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Multiplies two monomials (adds exponents).
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `u32`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars(), other.num_vars());
        Self(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| a.checked_add(*b).expect("exponent overflow"))
                .collect(),
        )
    }

    /// Multiplies in place by `x_var^amount`.
    ///
    /// # Panics
    ///
    /// Panics if the exponent overflows `u32`.
    pub fn shift_up(&mut self, var: usize, amount: u32) {
        self.0[var] = self.0[var].checked_add(amount).expect("exponent overflow");
    }

    /// Divides in place by `x_var^amount`.
    ///
    /// # Panics
    ///
    /// Panics if the exponent of `var` is below `amount`.
    pub fn shift_down(&mut self, var: usize, amount: u32) {
        let e = self.0[var];
        assert!(
            e >= amount,
            "cannot divide x{var}^{e} by x{var}^{amount}"
        );
        self.0[var] = e - amount;
    }

    /// Raises to the k-th power in place (multiplies every exponent by k).
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `u32`.
    pub fn scale(&mut self, k: u32) {
        for e in &mut self.0 {
            *e = e.checked_mul(k).expect("exponent overflow");
        }
    }

    /// Converts to a human-readable string.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        let vars = ['x', 'y', 'z', 'w', 'u', 'v'];
        let parts: Vec<String> = self
            .0
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| {
                let name = if i < vars.len() {
                    vars[i].to_string()
                } else {
                    format!("x{i}")
                };
                if e == 1 {
                    name
                } else {
                    format!("{name}^{e}")
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

impl std::fmt::Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

/// Compares two monomials lexicographically.
#[must_use]
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    a.exponents().cmp(b.exponents())
}

/// Compares two monomials by graded reverse lexicographic order.
#[must_use]
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Smaller exponent in the last differing variable wins
    for (ea, eb) in a.exponents().iter().zip(b.exponents()).rev() {
        match eb.cmp(ea) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares two monomials by graded lexicographic order.
#[must_use]
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => cmp_lex(a, b),
        ord => ord,
    }
}
