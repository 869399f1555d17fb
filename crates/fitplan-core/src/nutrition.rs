//! Macronutrient arithmetic.
//!
//! Calories are derived from gram totals with the Atwater general factors:
//! 4 kcal/g for protein and carbohydrate, 9 kcal/g for fat.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// kcal per gram of protein.
pub const KCAL_PER_GRAM_PROTEIN: u32 = 4;
/// kcal per gram of carbohydrate.
pub const KCAL_PER_GRAM_CARBS: u32 = 4;
/// kcal per gram of fat.
pub const KCAL_PER_GRAM_FAT: u32 = 9;

/// Protein / carbohydrate / fat in whole grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl Macros {
    pub const ZERO: Macros = Macros {
        protein_g: 0,
        carbs_g: 0,
        fat_g: 0,
    };

    pub const fn new(protein_g: u32, carbs_g: u32, fat_g: u32) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    pub fn protein_kcal(&self) -> u32 {
        self.protein_g.saturating_mul(KCAL_PER_GRAM_PROTEIN)
    }

    pub fn carbs_kcal(&self) -> u32 {
        self.carbs_g.saturating_mul(KCAL_PER_GRAM_CARBS)
    }

    pub fn fat_kcal(&self) -> u32 {
        self.fat_g.saturating_mul(KCAL_PER_GRAM_FAT)
    }

    /// Total energy in kcal.
    ///
    /// Uses saturating arithmetic so absurd catalog values cannot wrap.
    pub fn calories(&self) -> u32 {
        self.protein_kcal()
            .saturating_add(self.carbs_kcal())
            .saturating_add(self.fat_kcal())
    }

    /// Share of total calories coming from each macro.
    pub fn split(&self) -> MacroSplit {
        let total = self.calories();
        if total == 0 {
            return MacroSplit::default();
        }
        let total = f64::from(total);
        MacroSplit {
            protein_percent: f64::from(self.protein_kcal()) / total * 100.0,
            carbs_percent: f64::from(self.carbs_kcal()) / total * 100.0,
            fat_percent: f64::from(self.fat_kcal()) / total * 100.0,
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            protein_g: self.protein_g.saturating_add(rhs.protein_g),
            carbs_g: self.carbs_g.saturating_add(rhs.carbs_g),
            fat_g: self.fat_g.saturating_add(rhs.fat_g),
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Self {
        iter.fold(Macros::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Macros> for Macros {
    fn sum<I: Iterator<Item = &'a Macros>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Calorie share per macronutrient, in percent (0 when there are no calories).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calories_use_atwater_factors() {
        let m = Macros::new(15, 25, 10);
        assert_eq!(m.protein_kcal(), 60);
        assert_eq!(m.carbs_kcal(), 100);
        assert_eq!(m.fat_kcal(), 90);
        assert_eq!(m.calories(), 250);
    }

    #[test]
    fn sum_adds_componentwise() {
        let total: Macros = [Macros::new(10, 20, 5), Macros::new(5, 5, 5)].iter().sum();
        assert_eq!(total, Macros::new(15, 25, 10));
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: Macros = std::iter::empty::<Macros>().sum();
        assert_eq!(total, Macros::ZERO);
        assert_eq!(total.calories(), 0);
    }

    #[test]
    fn calories_saturate_instead_of_wrapping() {
        let m = Macros::new(u32::MAX, 1, 1);
        assert_eq!(m.calories(), u32::MAX);
    }

    #[test]
    fn split_sums_to_hundred() {
        let split = Macros::new(15, 25, 10).split();
        let sum = split.protein_percent + split.carbs_percent + split.fat_percent;
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((split.fat_percent - 36.0).abs() < 1e-9);
    }

    #[test]
    fn split_of_nothing_is_zero() {
        assert_eq!(Macros::ZERO.split(), MacroSplit::default());
    }
}
