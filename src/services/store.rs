use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::core::geo::GeoPoint;
use crate::models::{Donor, Hospital};

/// Errors that can occur when interacting with the donor/hospital store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// A donor record to be inserted; the id is assigned by the store
#[derive(Debug, Clone)]
pub struct NewDonor {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub blood_type: String,
    pub location: Option<GeoPoint>,
    pub last_donation: Option<NaiveDate>,
}

/// PostgreSQL-backed donor and hospital directory
///
/// The matching engine never talks to this client directly; the alert
/// handler queries a snapshot here and hands it to the engine.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Point-in-time snapshot of donors eligible for the given blood type
    ///
    /// This is the directory-snapshot contract the engine relies on: every
    /// returned record has role "donor", the exact requested blood type,
    /// and resolved coordinates.
    pub async fn list_eligible_donors(&self, blood_type: &str) -> Result<Vec<Donor>, StoreError> {
        let query = r#"
            SELECT id, name, phone, email, role, address, lat, lng, blood_type, last_donation
            FROM users
            WHERE role = 'donor'
              AND blood_type = $1
              AND lat IS NOT NULL
              AND lng IS NOT NULL
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(blood_type)
            .fetch_all(&self.pool)
            .await?;

        let donors = rows.iter().map(donor_from_row).collect::<Vec<_>>();

        tracing::debug!(
            "Snapshot for blood type {} holds {} donors",
            blood_type,
            donors.len()
        );

        Ok(donors)
    }

    /// Fetch a hospital by id
    pub async fn get_hospital(&self, id: i32) -> Result<Option<Hospital>, StoreError> {
        let row = sqlx::query("SELECT id, name, lat, lng FROM hospitals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| hospital_from_row(&row)))
    }

    /// List all hospitals
    pub async fn list_hospitals(&self) -> Result<Vec<Hospital>, StoreError> {
        let rows = sqlx::query("SELECT id, name, lat, lng FROM hospitals ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(hospital_from_row).collect())
    }

    /// List all donor records, including those without coordinates
    pub async fn list_donors(&self) -> Result<Vec<Donor>, StoreError> {
        let query = r#"
            SELECT id, name, phone, email, role, address, lat, lng, blood_type, last_donation
            FROM users
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(donor_from_row).collect())
    }

    /// Fetch a single donor by id
    pub async fn get_donor(&self, id: i32) -> Result<Option<Donor>, StoreError> {
        let query = r#"
            SELECT id, name, phone, email, role, address, lat, lng, blood_type, last_donation
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.map(|row| donor_from_row(&row)))
    }

    /// Whether a donor already exists with the given email or phone
    pub async fn email_or_phone_taken(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 OR phone = $2)")
            .bind(email)
            .bind(phone)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get(0))
    }

    /// Insert a new donor and return the stored record
    pub async fn insert_donor(&self, donor: NewDonor) -> Result<Donor, StoreError> {
        let query = r#"
            INSERT INTO users (name, phone, email, password, role, address, lat, lng, blood_type, last_donation)
            VALUES ($1, $2, $3, $4, 'donor', $5, $6, $7, $8, $9)
            RETURNING id, name, phone, email, role, address, lat, lng, blood_type, last_donation
        "#;

        let row = sqlx::query(query)
            .bind(&donor.name)
            .bind(&donor.phone)
            .bind(&donor.email)
            .bind(&donor.password)
            .bind(&donor.address)
            .bind(donor.location.map(|l| l.lat))
            .bind(donor.location.map(|l| l.lng))
            .bind(&donor.blood_type)
            .bind(donor.last_donation)
            .fetch_one(&self.pool)
            .await?;

        Ok(donor_from_row(&row))
    }

    /// Persist an updated donor record
    pub async fn update_donor(&self, donor: &Donor) -> Result<(), StoreError> {
        let query = r#"
            UPDATE users
            SET name = $1, phone = $2, address = $3, blood_type = $4,
                last_donation = $5, lat = $6, lng = $7
            WHERE id = $8
        "#;

        sqlx::query(query)
            .bind(&donor.name)
            .bind(&donor.phone)
            .bind(&donor.address)
            .bind(&donor.blood_type)
            .bind(donor.last_donation)
            .bind(donor.location.map(|l| l.lat))
            .bind(donor.location.map(|l| l.lng))
            .bind(donor.id)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Updated donor {}", donor.id);

        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn donor_from_row(row: &sqlx::postgres::PgRow) -> Donor {
    Donor {
        id: row.get("id"),
        name: row.get("name"),
        phone: row.get("phone"),
        email: row.get("email"),
        role: row.get("role"),
        address: row.get("address"),
        blood_type: row.get("blood_type"),
        location: location_from(row.get("lat"), row.get("lng")),
        last_donation: row.get("last_donation"),
    }
}

fn hospital_from_row(row: &sqlx::postgres::PgRow) -> Hospital {
    Hospital {
        id: row.get("id"),
        name: row.get("name"),
        location: GeoPoint {
            lat: row.get("lat"),
            lng: row.get("lng"),
        },
    }
}

/// Coordinates only count as present when both components are
fn location_from(lat: Option<f64>, lng: Option<f64>) -> Option<GeoPoint> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
        _ => None,
    }
}
