//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Prices European calls and puts with the closed-form Black-Scholes-Merton
//! formula and backs out implied volatilities with Brent's method. Used to
//! cross-check the lattice and Monte Carlo engines.

use pr_core::{errors::Result, require_arg, Price, Rate, Real, Time, Volatility};
use pr_instruments::{OptionContract, OptionType};
use pr_math::{brent, normal_cdf, normal_pdf};

/// Upper end of the implied volatility search bracket.
const MAX_IMPLIED_VOL: Volatility = 2.0;
const IMPLIED_VOL_ACCURACY: Real = 1.0e-10;

/// A European option under the Black-Scholes-Merton model:
///
/// $$C = S e^{-q\tau} N(d_1) - K e^{-r\tau} N(d_2)$$
/// $$P = K e^{-r\tau} N(-d_2) - S e^{-q\tau} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)\tau}{\sigma\sqrt{\tau}}$.
///
/// Degenerate inputs (`tau = 0`, or `sigma = 0` outside
/// [`fair_value`](Self::fair_value)) give whatever the formula gives,
/// typically NaN or an infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsmOption {
    /// Spot price `S`.
    pub spot: Price,
    /// Strike `K`.
    pub strike: Price,
    /// Time to maturity `τ` in years.
    pub tau: Time,
    /// Volatility `σ`.
    pub sigma: Volatility,
    /// Continuously compounded discount rate `r`.
    pub discount_rate: Rate,
    /// Continuous dividend yield `q`.
    pub dividend_yield: Rate,
}

impl BsmOption {
    /// Create an option.
    pub fn new(
        spot: Price,
        strike: Price,
        tau: Time,
        sigma: Volatility,
        discount_rate: Rate,
        dividend_yield: Rate,
    ) -> Self {
        Self {
            spot,
            strike,
            tau,
            sigma,
            discount_rate,
            dividend_yield,
        }
    }

    /// `(call, put)` fair values.
    ///
    /// With zero volatility the values are the discounted intrinsic values
    /// `max(S e^{−qτ} − K e^{−rτ}, 0)` and `max(K e^{−rτ} − S e^{−qτ}, 0)`.
    pub fn fair_value(&self) -> (Price, Price) {
        let spot = self.spot * self.dividend_discount();
        let strike = self.strike * self.discount();
        if self.sigma == 0.0 {
            return ((spot - strike).max(0.0), (strike - spot).max(0.0));
        }
        let (d1, d2) = (self.d1(), self.d2());
        (
            spot * normal_cdf(d1) - strike * normal_cdf(d2),
            strike * normal_cdf(-d2) - spot * normal_cdf(-d1),
        )
    }

    /// Fair value of one side.
    pub fn price(&self, side: OptionType) -> Price {
        let (call, put) = self.fair_value();
        match side {
            OptionType::Call => call,
            OptionType::Put => put,
        }
    }

    /// `(call, put)` deltas: `e^{−qτ}N(d₁)` and `−e^{−qτ}N(−d₁)`.
    pub fn delta(&self) -> (Real, Real) {
        let d1 = self.d1();
        let df_q = self.dividend_discount();
        (df_q * normal_cdf(d1), -df_q * normal_cdf(-d1))
    }

    /// Vega, scaled by `τ`: `S e^{−qτ} φ(d₁) τ`.
    ///
    /// This is the textbook vega multiplied by `√τ`; it agrees with it
    /// only at `τ = 1`.
    pub fn vega(&self) -> Real {
        self.spot * self.dividend_discount() * normal_pdf(self.d1()) * self.tau
    }

    fn d1(&self) -> Real {
        let drift = self.discount_rate - self.dividend_yield + 0.5 * self.sigma * self.sigma;
        ((self.spot / self.strike).ln() + drift * self.tau) / self.scaled_vol()
    }

    fn d2(&self) -> Real {
        self.d1() - self.scaled_vol()
    }

    fn scaled_vol(&self) -> Real {
        self.sigma * self.tau.sqrt()
    }

    fn discount(&self) -> Real {
        (-self.discount_rate * self.tau).exp()
    }

    fn dividend_discount(&self) -> Real {
        (-self.dividend_yield * self.tau).exp()
    }
}

/// The volatility in `[0, 2]` at which the `side` price equals `price`.
///
/// Fails with `InvalidArgument` if the zero-volatility price already
/// exceeds `price`, or if no root lies in the bracket.
pub fn implied_volatility(
    price: Price,
    side: OptionType,
    spot: Price,
    strike: Price,
    tau: Time,
    discount_rate: Rate,
    dividend_yield: Rate,
) -> Result<Volatility> {
    let error = |sigma: Volatility| {
        BsmOption::new(spot, strike, tau, sigma, discount_rate, dividend_yield).price(side) - price
    };
    let floor = error(0.0);
    require_arg!(
        floor <= 0.0,
        "target price {price} is below the zero-volatility {side} price {}",
        price + floor
    );
    brent(error, 0.0, MAX_IMPLIED_VOL, IMPLIED_VOL_ACCURACY)
}

/// Closed-form pricing of a vanilla [`OptionContract`].
#[derive(Debug, Clone)]
pub struct AnalyticEuropeanEngine {
    contract: OptionContract,
}

impl AnalyticEuropeanEngine {
    /// Create an engine for `contract`.
    pub fn new(contract: OptionContract) -> Self {
        Self { contract }
    }

    /// The fair value of the contract over its horizon.
    ///
    /// Fails with `InvalidArgument` for a custom payoff.
    pub fn calculate(&self) -> Result<Price> {
        let c = &self.contract;
        let side = c.payoff.option_type().ok_or_else(|| {
            pr_core::Error::InvalidArgument(format!("no closed form for payoff {}", c.payoff))
        })?;
        let option = BsmOption::new(
            c.spot,
            c.strike,
            c.horizon,
            c.volatility,
            c.discount_rate,
            c.dividend_yield,
        );
        Ok(option.price(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pr_instruments::Payoff;
    use proptest::prelude::*;

    #[test]
    fn put_reference_value() {
        let (_, put) = BsmOption::new(36.0, 40.0, 1.0, 0.2, 0.06, 0.0).fair_value();
        assert_abs_diff_eq!(put, 3.844, epsilon = 5e-4);
    }

    #[test]
    fn put_call_parity_with_dividends() {
        let (s, k, r, q, sigma, t) = (100.0, 105.0, 0.08, 0.03, 0.25, 0.5);
        let (call, put) = BsmOption::new(s, k, t, sigma, r, q).fair_value();
        let parity = call - s * (-q * t).exp() + k * (-r * t).exp();
        assert_abs_diff_eq!(put, parity, epsilon = 1e-10);
    }

    #[test]
    fn zero_vol_is_discounted_intrinsic() {
        let (call, put) = BsmOption::new(100.0, 95.0, 1.0, 0.0, 0.05, 0.0).fair_value();
        assert_abs_diff_eq!(call, 100.0 - 95.0 * (-0.05_f64).exp(), epsilon = 1e-12);
        assert_eq!(put, 0.0);
    }

    #[test]
    fn deltas_differ_by_dividend_discount() {
        let opt = BsmOption::new(40.0, 40.0, 2.0, 0.3, 0.05, 0.02);
        let (call, put) = opt.delta();
        assert!(call > 0.0 && call < 1.0);
        assert!(put < 0.0 && put > -1.0);
        assert_abs_diff_eq!(call - put, (-0.04_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn vega_is_scaled_by_tau() {
        let one = BsmOption::new(36.0, 40.0, 1.0, 0.2, 0.06, 0.0);
        let bump = BsmOption { sigma: 0.2 + 1e-6, ..one };
        let numeric = (bump.fair_value().0 - one.fair_value().0) / 1e-6;
        assert_abs_diff_eq!(one.vega(), numeric, epsilon = 1e-4);

        let two = BsmOption { tau: 2.0, ..one };
        let bump = BsmOption { sigma: 0.2 + 1e-6, ..two };
        let numeric = (bump.fair_value().0 - two.fair_value().0) / 1e-6;
        assert_abs_diff_eq!(two.vega(), numeric * 2.0_f64.sqrt(), epsilon = 1e-4);
    }

    #[test]
    fn implied_vol_round_trip() {
        let price = BsmOption::new(38.0, 40.0, 2.0, 0.35, 0.06, 0.0).price(OptionType::Put);
        let vol = implied_volatility(price, OptionType::Put, 38.0, 40.0, 2.0, 0.06, 0.0).unwrap();
        assert_abs_diff_eq!(vol, 0.35, epsilon = 1e-8);
    }

    #[test]
    fn implied_vol_below_intrinsic_fails() {
        let r = implied_volatility(1.0, OptionType::Call, 50.0, 40.0, 1.0, 0.06, 0.0);
        assert!(matches!(r, Err(pr_core::Error::InvalidArgument(_))));
    }

    #[test]
    fn implied_vol_outside_bracket_fails() {
        // a call is worth less than the spot for any volatility
        let r = implied_volatility(36.5, OptionType::Call, 36.0, 40.0, 1.0, 0.06, 0.0);
        assert!(r.is_err());
    }

    #[test]
    fn engine_matches_closed_form() {
        let contract = OptionContract::new(36.0, 40.0, Payoff::Put)
            .with_rates(0.06, 0.0)
            .with_volatility(0.4)
            .with_horizon(2.0, 100);
        let v = AnalyticEuropeanEngine::new(contract).calculate().unwrap();
        assert_abs_diff_eq!(v, 7.700, epsilon = 5e-4);

        fn digital(s: Real, k: Real) -> Real {
            if s > k {
                1.0
            } else {
                0.0
            }
        }
        let custom = OptionContract { payoff: Payoff::Custom(digital), ..contract };
        assert!(AnalyticEuropeanEngine::new(custom).calculate().is_err());
    }

    proptest! {
        #[test]
        fn call_equals_mirrored_put_at_zero_rates(
            spot in 1.0f64..10.0,
            strike in 1.0f64..10.0,
            tau in 0.05f64..10.0,
            sigma in 0.01f64..2.0,
        ) {
            let (call, put) = BsmOption::new(spot, strike, tau, sigma, 0.0, 0.0).fair_value();
            let (m_call, m_put) = BsmOption::new(strike, spot, tau, sigma, 0.0, 0.0).fair_value();
            prop_assert!((call - m_put).abs() < 1e-9);
            prop_assert!((put - m_call).abs() < 1e-9);
        }
    }
}
