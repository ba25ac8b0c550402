mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod owner_detail;
pub use owner_detail::OwnerDetail;

mod animal_detail;
pub use animal_detail::AnimalDetail;

mod record_detail;
pub use record_detail::RecordDetail;
