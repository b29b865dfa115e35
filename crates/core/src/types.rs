/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All audit timestamps (creation times, token expiries) are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Movie run windows (`start_date`, `end_date`) are plain calendar dates.
pub type CalendarDate = chrono::NaiveDate;
