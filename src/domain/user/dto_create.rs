use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}
