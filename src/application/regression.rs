use crate::domain::entities::regression_report::{Coefficient, RegressionReport, ResidualDiagnostics};
use crate::domain::entities::regression_row::JoinOutcome;
use crate::domain::error::DomainError;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, StudentsT};
use tracing::info;

/// Two parameters plus at least one residual degree of freedom.
pub const MIN_OBSERVATIONS: usize = 3;

pub const DEPENDENT_NAME: &str = "Change %";
pub const REGRESSOR_NAME: &str = "Mentions";

/// Regress the joined `Change %` values on mention counts.
pub fn run_regression(joined: &JoinOutcome, min_rows: usize) -> Result<RegressionReport, DomainError> {
    let report = fit_ols(&joined.mentions(), &joined.changes(), min_rows)?;
    info!(
        observations = report.observations,
        slope = report.slope.estimate,
        r_squared = report.r_squared,
        "Fitted OLS model"
    );
    Ok(report)
}

/// Ordinary least squares of `y = b0 + b1 * x` via the closed-form normal
/// equations. `min_rows` below [`MIN_OBSERVATIONS`] is raised to it.
pub fn fit_ols(x: &[f64], y: &[f64], min_rows: usize) -> Result<RegressionReport, DomainError> {
    if x.len() != y.len() {
        return Err(DomainError::InvalidInput(format!(
            "regressor has {} values but dependent has {}",
            x.len(),
            y.len()
        )));
    }
    let required = min_rows.max(MIN_OBSERVATIONS);
    if x.len() < required {
        return Err(DomainError::InsufficientData {
            required,
            found: x.len(),
        });
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(DomainError::InvalidInput("non-finite value in regression input".into()));
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let sxx: f64 = x.iter().map(|xi| (xi - x_mean).powi(2)).sum();
    if sxx <= f64::EPSILON * n * x_mean.abs().max(1.0) {
        return Err(DomainError::DegenerateInput(format!(
            "all {REGRESSOR_NAME} values are equal; slope is not identifiable"
        )));
    }
    let sxy: f64 = x.iter().zip(y).map(|(xi, yi)| (xi - x_mean) * (yi - y_mean)).sum();
    let sst: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let residuals: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| yi - (intercept + slope * xi))
        .collect();
    let ssr: f64 = residuals.iter().map(|e| e * e).sum();

    let df_model = 1usize;
    let df_resid = x.len() - 2;
    let dfr = df_resid as f64;

    let sigma2 = ssr / dfr;
    let se_slope = (sigma2 / sxx).sqrt();
    let se_intercept = (sigma2 * (1.0 / n + x_mean * x_mean / sxx)).sqrt();

    let t_dist = StudentsT::new(0.0, 1.0, dfr).map_err(|e| DomainError::DegenerateInput(e.to_string()))?;
    let t_crit = t_dist.inverse_cdf(0.975);
    let coefficient = |name: &str, estimate: f64, std_error: f64| {
        let t_stat = estimate / std_error;
        Coefficient {
            name: name.to_string(),
            estimate,
            std_error,
            t_stat,
            p_value: 2.0 * (1.0 - t_dist.cdf(t_stat.abs())),
            ci_lower: estimate - t_crit * std_error,
            ci_upper: estimate + t_crit * std_error,
        }
    };

    let r_squared = 1.0 - ssr / sst;
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1.0) / dfr;
    let f_statistic = (r_squared / df_model as f64) / ((1.0 - r_squared) / dfr);
    let f_dist = FisherSnedecor::new(df_model as f64, dfr)
        .map_err(|e| DomainError::DegenerateInput(e.to_string()))?;
    let f_p_value = 1.0 - f_dist.cdf(f_statistic);

    let log_likelihood = -n / 2.0 * ((2.0 * std::f64::consts::PI).ln() + (ssr / n).ln() + 1.0);
    let k = (df_model + 1) as f64;
    let aic = -2.0 * log_likelihood + 2.0 * k;
    let bic = -2.0 * log_likelihood + k * n.ln();

    Ok(RegressionReport {
        dependent: DEPENDENT_NAME.to_string(),
        observations: x.len(),
        df_model,
        df_resid,
        intercept: coefficient("const", intercept, se_intercept),
        slope: coefficient(REGRESSOR_NAME, slope, se_slope),
        r_squared,
        adj_r_squared,
        f_statistic,
        f_p_value,
        log_likelihood,
        aic,
        bic,
        diagnostics: residual_diagnostics(&residuals, ssr, x)?,
    })
}

fn residual_diagnostics(residuals: &[f64], ssr: f64, x: &[f64]) -> Result<ResidualDiagnostics, DomainError> {
    let n = residuals.len() as f64;

    let durbin_watson = residuals
        .windows(2)
        .map(|w| (w[1] - w[0]).powi(2))
        .sum::<f64>()
        / ssr;

    let mean = residuals.iter().sum::<f64>() / n;
    let moment = |p: i32| residuals.iter().map(|e| (e - mean).powi(p)).sum::<f64>() / n;
    let m2 = moment(2);
    let skew = moment(3) / m2.powf(1.5);
    let kurtosis = moment(4) / (m2 * m2);

    let jarque_bera = n / 6.0 * (skew.powi(2) + (kurtosis - 3.0).powi(2) / 4.0);
    let chi2 = ChiSquared::new(2.0).map_err(|e| DomainError::DegenerateInput(e.to_string()))?;
    let jarque_bera_p_value = 1.0 - chi2.cdf(jarque_bera);

    Ok(ResidualDiagnostics {
        durbin_watson,
        jarque_bera,
        jarque_bera_p_value,
        skew,
        kurtosis,
        condition_number: condition_number(x),
    })
}

/// Ratio of the singular values of the design matrix `[1, x]`, from the
/// eigenvalues of the 2x2 Gram matrix.
fn condition_number(x: &[f64]) -> f64 {
    let a = x.len() as f64;
    let b: f64 = x.iter().sum();
    let d: f64 = x.iter().map(|v| v * v).sum();
    let half_trace = (a + d) / 2.0;
    let det = a * d - b * b;
    let gap = (half_trace * half_trace - det).max(0.0).sqrt();
    let (max, min) = (half_trace + gap, half_trace - gap);
    (max / min).sqrt()
}
