// src/noyau/decimal.rs
//
// Décimal exact à virgule fixe : valeur = mantisse / 10^echelle.
//
// - + - * : exacts (l’échelle d’un produit = somme des échelles)
// - /     : échelle fixée par l’appelant, arrondi "half-up" (au plus loin de 0)
// - lecture : "12", "12.5", ".5", "12." ; tout le reste est refusé
// - égalité par VALEUR (2.50 == 2.5)

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use thiserror::Error;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// Numéral refusé par la lecture décimale.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("numéral invalide: {0:?}")]
pub struct NumeralInvalide(pub String);

#[derive(Clone, Debug)]
pub struct Decimal {
    mantisse: BigInt,
    echelle: u32,
}

impl Decimal {
    pub fn zero() -> Self {
        Self {
            mantisse: BigInt::zero(),
            echelle: 0,
        }
    }

    pub fn from_parts(mantisse: BigInt, echelle: u32) -> Self {
        Self { mantisse, echelle }
    }

    pub fn mantisse(&self) -> &BigInt {
        &self.mantisse
    }

    pub fn echelle(&self) -> u32 {
        self.echelle
    }

    pub fn is_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantisse.is_negative()
    }

    /// Mantisse ramenée à une échelle >= à la sienne (multiplication exacte).
    fn mantisse_a(&self, echelle: u32) -> BigInt {
        &self.mantisse * pow10(echelle - self.echelle)
    }

    pub fn add(&self, autre: &Decimal) -> Decimal {
        let e = self.echelle.max(autre.echelle);
        Decimal::from_parts(self.mantisse_a(e) + autre.mantisse_a(e), e)
    }

    pub fn sub(&self, autre: &Decimal) -> Decimal {
        let e = self.echelle.max(autre.echelle);
        Decimal::from_parts(self.mantisse_a(e) - autre.mantisse_a(e), e)
    }

    pub fn mul(&self, autre: &Decimal) -> Decimal {
        Decimal::from_parts(
            &self.mantisse * &autre.mantisse,
            self.echelle + autre.echelle,
        )
    }

    /// Division à `echelle` chiffres après la virgule, arrondi half-up.
    /// `None` si le diviseur est nul.
    ///
    /// a/b = (ma/10^ea) / (mb/10^eb)
    ///     => mantisse = round( ma * 10^(eb+echelle) / (mb * 10^ea) )
    pub fn div(&self, autre: &Decimal, echelle: u32) -> Option<Decimal> {
        if autre.is_zero() {
            return None;
        }

        let n = &self.mantisse * pow10(autre.echelle + echelle);
        let d = &autre.mantisse * pow10(self.echelle);

        let negatif = n.is_negative() != d.is_negative();
        let (n, d) = (n.abs(), d.abs());

        // half-up sur les magnitudes : floor((2n + d) / 2d)
        let deux = BigInt::from(2u8);
        let deux_d = &d * &deux;
        let q = (n * deux + d) / deux_d;

        let q = if negatif { -q } else { q };
        Some(Decimal::from_parts(q, echelle))
    }

    /// Retire les zéros de fin de la partie fractionnaire (échelle >= 0).
    pub fn sans_zeros_finaux(&self) -> Decimal {
        if self.mantisse.is_zero() {
            return Decimal::zero();
        }

        let dix = BigInt::from(10);
        let mut m = self.mantisse.clone();
        let mut e = self.echelle;
        while e > 0 && (&m % &dix).is_zero() {
            m /= &dix;
            e -= 1;
        }
        Decimal::from_parts(m, e)
    }

    /// Vrai si la partie fractionnaire est nulle.
    pub fn est_entier(&self) -> bool {
        self.sans_zeros_finaux().echelle == 0
    }

    /// Écriture décimale simple (jamais scientifique), échelle conservée.
    pub fn to_plain_string(&self) -> String {
        let neg = self.mantisse.sign() == Sign::Minus;
        let chiffres = self.mantisse.abs().to_str_radix(10);

        if self.echelle == 0 {
            return if neg { format!("-{chiffres}") } else { chiffres };
        }

        let e = self.echelle as usize;
        let mut chiffres = chiffres;
        while chiffres.len() <= e {
            chiffres.insert(0, '0');
        }
        let (ent, frac) = chiffres.split_at(chiffres.len() - e);

        if neg {
            format!("-{ent}.{frac}")
        } else {
            format!("{ent}.{frac}")
        }
    }
}

impl FromStr for Decimal {
    type Err = NumeralInvalide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let refus = || NumeralInvalide(s.to_string());

        let (ent, frac) = match s.split_once('.') {
            Some((ent, frac)) => (ent, frac),
            None => (s, ""),
        };

        let que_des_chiffres = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if !que_des_chiffres(ent) || !que_des_chiffres(frac) || ent.len() + frac.len() == 0 {
            return Err(refus());
        }

        let texte = format!("{ent}{frac}");
        let mantisse = BigInt::parse_bytes(texte.as_bytes(), 10).ok_or_else(refus)?;
        let echelle = u32::try_from(frac.len()).map_err(|_| refus())?;

        Ok(Decimal::from_parts(mantisse, echelle))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let e = self.echelle.max(other.echelle);
        self.mantisse_a(e).cmp(&other.mantisse_a(e))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}
