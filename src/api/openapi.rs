//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    articles, bookings, contact, customers, equipment, expenses, health, lockers, rentals, stats,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ToolRent API",
        version = "0.4.0",
        description = "Equipment Rental Management REST API",
        license(name = "MIT"),
        contact(name = "ToolRent", email = "dev@toolrent.example")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::quote_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::update_booking,
        bookings::set_booking_status,
        bookings::delete_booking,
        // Rentals
        rentals::list_rentals,
        rentals::get_rental,
        rentals::create_rental,
        rentals::update_rental,
        rentals::delete_rental,
        // Expenses
        expenses::list_expenses,
        expenses::get_expense,
        expenses::create_expense,
        expenses::update_expense,
        expenses::delete_expense,
        // Lockers
        lockers::list_lockers,
        lockers::get_locker,
        lockers::create_locker,
        lockers::update_locker,
        lockers::delete_locker,
        // Articles
        articles::list_articles,
        articles::get_article,
        articles::list_all_articles,
        articles::create_article,
        articles::update_article,
        articles::delete_article,
        // Customers
        customers::list_customers,
        // Contact
        contact::submit_contact,
        // Stats
        stats::get_stats,
        stats::get_monthly_stats,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentDetails,
            crate::models::equipment::PriceTiers,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            equipment::QuoteResponse,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingStatus,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBooking,
            bookings::SetBookingStatus,
            // Rentals
            crate::models::rental::Rental,
            crate::models::rental::RentalDetails,
            crate::models::rental::RentalStatus,
            crate::models::rental::EquipmentInstance,
            crate::models::rental::CreateRental,
            crate::models::rental::UpdateRental,
            // Expenses
            crate::models::expense::Expense,
            crate::models::expense::CreateExpense,
            crate::models::expense::UpdateExpense,
            // Lockers
            crate::models::locker::Locker,
            crate::models::locker::CreateLocker,
            crate::models::locker::UpdateLocker,
            // Articles
            crate::models::article::Article,
            crate::models::article::CreateArticle,
            crate::models::article::UpdateArticle,
            // Customers
            customers::CustomerSummary,
            // Contact
            contact::ContactRequest,
            contact::ContactResponse,
            // Stats
            stats::StatsResponse,
            stats::MonthlySummary,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "equipment", description = "Equipment catalog"),
        (name = "bookings", description = "Customer bookings"),
        (name = "rentals", description = "Rental management"),
        (name = "expenses", description = "Expense ledger"),
        (name = "lockers", description = "Storage lockers"),
        (name = "articles", description = "Site articles"),
        (name = "customers", description = "Customer overview"),
        (name = "contact", description = "Contact form"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the swagger-ui router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
