use chrono::NaiveDate;

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl UpdateUserDto {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.birth_date.is_none()
    }
}
