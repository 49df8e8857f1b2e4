use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::analysis::ReservoirCalculator;
use crate::error::ReservoirError;
use crate::models::{ReservoirInputs, ReservoirResult};
use crate::visualization::{BarChart, PieChart};

use super::state::AppState;

// ---------------------------------------------------------------------------
// Error wrapper
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

#[derive(Debug)]
pub(crate) struct WebError(ReservoirError);

impl From<ReservoirError> for WebError {
    fn from(e: ReservoirError) -> Self {
        WebError(e)
    }
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_type) = match &self.0 {
            ReservoirError::InvalidInput(_) | ReservoirError::ParseError(_) => {
                (actix_web::http::StatusCode::BAD_REQUEST, "Bad Request")
            }
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ),
        };
        HttpResponse::build(status).json(ErrorBody {
            error: error_type.to_string(),
            details: self.0.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
pub struct CalculateResponse {
    inputs: ReservoirInputs,
    result: ReservoirResult,
    bar_chart: BarChart,
    pie_chart: Option<PieChart>,
    /// Inputs outside their typical range; advisory only
    warnings: Vec<String>,
}

pub async fn calculate(
    state: web::Data<AppState>,
    body: web::Json<ReservoirInputs>,
) -> Result<HttpResponse, WebError> {
    let inputs = body.into_inner();
    let result = ReservoirCalculator::new(&inputs).result()?;

    let warnings = state
        .ranges
        .out_of_range(&inputs)
        .iter()
        .map(|w| w.to_string())
        .collect();

    Ok(HttpResponse::Ok().json(CalculateResponse {
        inputs,
        result,
        bar_chart: BarChart::from_result(&result),
        pie_chart: PieChart::from_result(&result),
        warnings,
    }))
}

pub async fn ranges(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::App;

    fn make_app(
        state: AppState,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .route("/api/calculate", web::post().to(calculate))
            .route("/api/ranges", web::get().to(ranges))
    }

    fn oil_body(porosity: f64, recovery_factor: f64) -> serde_json::Value {
        serde_json::json!({
            "reserve": {"type": "oil", "bo": 1.2},
            "area": 500.0,
            "thickness": 50.0,
            "porosity": porosity,
            "water_saturation": 0.25,
            "recovery_factor": recovery_factor
        })
    }

    #[actix_web::test]
    async fn test_calculate_oil_with_recovery() {
        let app = actix_test::init_service(make_app(AppState::default())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/calculate")
            .set_json(oil_body(0.20, 0.35))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        let oiip = body["result"]["in_place_volume"].as_f64().unwrap();
        assert!((oiip - 242_437_500.0).abs() < 1e-3);
        assert_eq!(body["result"]["reserve_type"], "oil");
        assert_eq!(body["bar_chart"]["bars"].as_array().unwrap().len(), 3);
        assert_eq!(body["pie_chart"]["slices"].as_array().unwrap().len(), 2);
        assert!(body["warnings"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_calculate_gas_without_recovery() {
        let app = actix_test::init_service(make_app(AppState::default())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/calculate")
            .set_json(serde_json::json!({
                "reserve": {"type": "gas", "bg": 0.005},
                "area": 1000.0,
                "thickness": 100.0,
                "porosity": 0.25,
                "water_saturation": 0.30
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(body["result"]["recovery"].is_null());
        assert!(body["pie_chart"].is_null());
        assert_eq!(body["bar_chart"]["bars"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_calculate_invalid_input_is_bad_request() {
        let app = actix_test::init_service(make_app(AppState::default())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/calculate")
            .set_json(oil_body(1.5, 0.0))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Bad Request");
        assert!(body["details"].as_str().unwrap().contains("porosity"));
    }

    #[actix_web::test]
    async fn test_calculate_overflow_is_bad_request() {
        let app = actix_test::init_service(make_app(AppState::default())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/calculate")
            .set_json(serde_json::json!({
                "reserve": {"type": "gas", "bg": 1e-310},
                "area": 1000.0,
                "thickness": 100.0,
                "porosity": 0.25,
                "water_saturation": 0.30,
                "recovery_factor": 0.5
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("in_place_volume"));
    }

    #[actix_web::test]
    async fn test_calculate_unknown_field_is_bad_request() {
        let app = actix_test::init_service(make_app(AppState::default())).await;
        let mut body = oil_body(0.20, 0.0);
        body["recovery_facter"] = serde_json::json!(0.35);
        let req = actix_test::TestRequest::post()
            .uri("/api/calculate")
            .set_json(body)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_calculate_reports_range_warnings() {
        let app = actix_test::init_service(make_app(AppState::default())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/calculate")
            .set_json(oil_body(0.45, 0.0))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        let warnings = body["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].as_str().unwrap().starts_with("porosity"));
    }

    #[actix_web::test]
    async fn test_ranges_endpoint() {
        let app = actix_test::init_service(make_app(AppState::default())).await;
        let req = actix_test::TestRequest::get().uri("/api/ranges").to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["area"]["max"].as_f64().unwrap(), 10_000.0);
        assert_eq!(body["bg"]["default"].as_f64().unwrap(), 0.005);
    }
}
