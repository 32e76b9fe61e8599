use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct Coefficient {
    pub name: String,
    pub estimate: f64,
    pub std_error: f64,
    pub t_stat: f64,
    pub p_value: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResidualDiagnostics {
    pub durbin_watson: f64,
    pub jarque_bera: f64,
    pub jarque_bera_p_value: f64,
    pub skew: f64,
    /// Pearson kurtosis (3.0 for a normal distribution).
    pub kurtosis: f64,
    pub condition_number: f64,
}

/// Fitted OLS model of one regressor plus an intercept.
#[derive(Debug, Clone, Serialize)]
pub struct RegressionReport {
    pub dependent: String,
    pub observations: usize,
    pub df_model: usize,
    pub df_resid: usize,
    pub intercept: Coefficient,
    pub slope: Coefficient,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub f_statistic: f64,
    pub f_p_value: f64,
    pub log_likelihood: f64,
    pub aic: f64,
    pub bic: f64,
    pub diagnostics: ResidualDiagnostics,
}

impl RegressionReport {
    pub fn coefficients(&self) -> [&Coefficient; 2] {
        [&self.intercept, &self.slope]
    }

    /// Predicted dependent value for a given regressor value.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept.estimate + self.slope.estimate * x
    }
}

const WIDTH: usize = 78;

impl fmt::Display for RegressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(WIDTH);
        let light = "-".repeat(WIDTH);

        writeln!(f, "{:^width$}", "OLS Regression Results", width = WIDTH)?;
        writeln!(f, "{heavy}")?;
        header_row(f, "Dep. Variable:", &self.dependent, "R-squared:", &format!("{:.3}", self.r_squared))?;
        header_row(f, "Model:", "OLS", "Adj. R-squared:", &format!("{:.3}", self.adj_r_squared))?;
        header_row(f, "Method:", "Least Squares", "F-statistic:", &format!("{:.4}", self.f_statistic))?;
        header_row(
            f,
            "No. Observations:",
            &self.observations.to_string(),
            "Prob (F-statistic):",
            &format!("{:.3}", self.f_p_value),
        )?;
        header_row(
            f,
            "Df Residuals:",
            &self.df_resid.to_string(),
            "Log-Likelihood:",
            &format!("{:.3}", self.log_likelihood),
        )?;
        header_row(f, "Df Model:", &self.df_model.to_string(), "AIC:", &format!("{:.2}", self.aic))?;
        header_row(f, "Covariance Type:", "nonrobust", "BIC:", &format!("{:.2}", self.bic))?;
        writeln!(f, "{heavy}")?;

        writeln!(
            f,
            "{:<14}{:>10}{:>11}{:>10}{:>10}{:>11}{:>11}",
            "", "coef", "std err", "t", "P>|t|", "[0.025", "0.975]"
        )?;
        writeln!(f, "{light}")?;
        for c in self.coefficients() {
            writeln!(
                f,
                "{:<14}{:>10.4}{:>11.3}{:>10.3}{:>10.3}{:>11.3}{:>11.3}",
                c.name, c.estimate, c.std_error, c.t_stat, c.p_value, c.ci_lower, c.ci_upper
            )?;
        }
        writeln!(f, "{heavy}")?;

        let d = &self.diagnostics;
        header_row(f, "Skew:", &format!("{:.3}", d.skew), "Durbin-Watson:", &format!("{:.3}", d.durbin_watson))?;
        header_row(
            f,
            "Kurtosis:",
            &format!("{:.3}", d.kurtosis),
            "Jarque-Bera (JB):",
            &format!("{:.3}", d.jarque_bera),
        )?;
        header_row(
            f,
            "Cond. No.",
            &format!("{:.3e}", d.condition_number),
            "Prob(JB):",
            &format!("{:.3}", d.jarque_bera_p_value),
        )?;
        write!(f, "{heavy}")
    }
}

fn header_row(
    f: &mut fmt::Formatter<'_>,
    left_label: &str,
    left_value: &str,
    right_label: &str,
    right_value: &str,
) -> fmt::Result {
    writeln!(f, "{left_label:<20}{left_value:>18}   {right_label:<22}{right_value:>15}")
}
