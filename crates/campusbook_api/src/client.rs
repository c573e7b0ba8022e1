// --- File: crates/campusbook_api/src/client.rs ---
use crate::auth::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, TokenStore, UserProfile};
use crate::availability::{AvailabilityResponse, SlotsResponse};
use crate::bookings::{BookingPayload, BookingUpdate};
use crate::error::ApiError;
use crate::facilities::FacilityPayload;
use campusbook_common::http::client::create_client;
use campusbook_config::AppConfig;
use campusbook_core::models::{Booking, Facility};
use campusbook_core::time::TimeOfDay;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotsQuery {
    facility_id: i64,
    date: NaiveDate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityQuery {
    facility_id: i64,
    date: NaiveDate,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

/// HTTP client for the CampusBook backend.
///
/// Holds the shared reqwest client, the backend base URL and the current
/// bearer token. The token is attached to every request when present,
/// persisted through [`TokenStore`], and dropped again the moment the
/// backend answers 401 so a dead session cannot linger.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
    token_store: TokenStore,
}

impl ApiClient {
    pub fn from_config(config: &AppConfig) -> Result<ApiClient, ApiError> {
        let http = create_client(config.api.timeout_secs, true)?;
        let token_store = TokenStore::new(&config.auth.token_file);
        let token = RwLock::new(token_store.load());
        Ok(ApiClient {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token,
            token_store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.bearer().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    fn store_token(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_string());
        }
        if let Err(err) = self.token_store.save(token) {
            warn!("failed to persist auth token: {err}");
        }
    }

    fn drop_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        if let Err(err) = self.token_store.clear() {
            warn!("failed to clear persisted auth token: {err}");
        }
    }

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.bearer() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // --- Response plumbing ---

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        Err(self.error_from(status, response).await)
    }

    async fn expect_success(&self, response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(self.error_from(status, response).await)
    }

    /// Builds the error for a non-2xx response. The backend sends
    /// `{"message": ...}`; that message travels verbatim. A 401 also drops
    /// the stored token (forced logout).
    async fn error_from(&self, status: StatusCode, response: Response) -> ApiError {
        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = body
            .message
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        debug!(status = status.as_u16(), %message, "backend returned an error");
        match status.as_u16() {
            401 => {
                self.drop_token();
                ApiError::AuthRequired
            }
            409 => ApiError::Conflict(message),
            code => ApiError::ServerError {
                status_code: code,
                message,
            },
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.apply_auth(self.http.get(self.url(path))).send().await?;
        self.handle_response(response).await
    }

    async fn get_json_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let response = self
            .apply_auth(self.http.get(self.url(path)).query(query))
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .apply_auth(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .apply_auth(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.apply_auth(self.http.patch(self.url(path))).send().await?;
        self.handle_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .apply_auth(self.http.delete(self.url(path)))
            .send()
            .await?;
        self.expect_success(response).await
    }

    // --- Auth Endpoints ---

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.post_json("/api/auth/login", &request).await?;
        self.store_token(&response.token);
        debug!(user = %response.user.username, "logged in");
        Ok(response)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post_json("/api/auth/register", &request).await
    }

    /// Tells the backend goodbye and drops the token either way; a failed
    /// logout call must not leave the session half-alive.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .apply_auth(self.http.post(self.url("/api/auth/logout")))
            .send()
            .await;
        if let Ok(response) = result {
            let _ = self.expect_success(response).await;
        }
        self.drop_token();
        Ok(())
    }

    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/auth/me").await
    }

    // --- Facility Endpoints ---

    pub async fn list_facilities(&self) -> Result<Vec<Facility>, ApiError> {
        self.get_json("/api/facilities").await
    }

    pub async fn get_facility(&self, id: i64) -> Result<Facility, ApiError> {
        self.get_json(&format!("/api/facilities/{id}")).await
    }

    pub async fn create_facility(&self, payload: FacilityPayload) -> Result<Facility, ApiError> {
        self.post_json("/api/facilities", &payload).await
    }

    pub async fn update_facility(
        &self,
        id: i64,
        payload: FacilityPayload,
    ) -> Result<Facility, ApiError> {
        self.put_json(&format!("/api/facilities/{id}"), &payload).await
    }

    pub async fn delete_facility(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/facilities/{id}")).await
    }

    // --- Booking Endpoints ---

    pub async fn list_bookings(&self, student_id: Option<String>) -> Result<Vec<Booking>, ApiError> {
        match student_id {
            Some(student_id) => {
                self.get_json_query("/api/bookings", &[("studentId", student_id)])
                    .await
            }
            None => self.get_json("/api/bookings").await,
        }
    }

    pub async fn get_booking(&self, id: i64) -> Result<Booking, ApiError> {
        self.get_json(&format!("/api/bookings/{id}")).await
    }

    pub async fn create_booking(&self, payload: BookingPayload) -> Result<Booking, ApiError> {
        self.post_json("/api/bookings", &payload).await
    }

    pub async fn update_booking(
        &self,
        id: i64,
        payload: BookingUpdate,
    ) -> Result<Booking, ApiError> {
        self.put_json(&format!("/api/bookings/{id}"), &payload).await
    }

    /// Soft-cancel: the booking keeps its row, status flips to CANCELLED.
    pub async fn cancel_booking(&self, id: i64) -> Result<Booking, ApiError> {
        self.patch_json(&format!("/api/bookings/{id}/cancel")).await
    }

    /// Hard delete, admin only.
    pub async fn delete_booking(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/bookings/{id}")).await
    }

    // --- Availability Endpoints ---

    pub async fn check_availability(
        &self,
        facility_id: i64,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<AvailabilityResponse, ApiError> {
        let query = AvailabilityQuery {
            facility_id,
            date,
            start_time: start,
            end_time: end,
        };
        self.get_json_query("/api/availability", &query).await
    }

    pub async fn fetch_slots(
        &self,
        facility_id: i64,
        date: NaiveDate,
    ) -> Result<SlotsResponse, ApiError> {
        let query = SlotsQuery { facility_id, date };
        self.get_json_query("/api/availability/slots", &query).await
    }
}
