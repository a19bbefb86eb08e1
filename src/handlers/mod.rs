pub mod choices;
pub mod department;
pub mod employee;
pub mod leave;
pub mod report;
pub mod review;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/v1/employee")
            .route(web::post().to(employee::create_employee))
            .route(web::get().to(employee::get_employees)),
    )
    .service(web::resource("/v1/employee/job-titles").route(web::get().to(employee::get_job_titles)))
    .service(
        web::resource("/v1/employee/{id}")
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    )
    .service(
        web::resource("/v1/department")
            .route(web::post().to(department::create_department))
            .route(web::get().to(department::get_departments)),
    )
    .service(
        web::resource("/v1/review")
            .route(web::post().to(review::create_review))
            .route(web::get().to(review::get_reviews)),
    )
    .service(
        web::resource("/v1/leave")
            .route(web::post().to(leave::create_leave_request))
            .route(web::get().to(leave::get_leave_requests)),
    )
    .service(web::resource("/v1/leave/{id}/status").route(web::patch().to(leave::update_leave_status)))
    .service(
        web::scope("/v1/report")
            .route("/summary", web::get().to(report::get_summary))
            .route("/leave-status", web::get().to(report::get_leave_status))
            .route(
                "/department-distribution",
                web::get().to(report::get_department_distribution),
            )
            .route("/top-departments", web::get().to(report::get_top_departments))
            .route("/leave-trends", web::get().to(report::get_leave_trends))
            .route("/turnover", web::get().to(report::get_turnover)),
    )
    .service(
        web::scope("/v1/choices")
            .route("/employees", web::get().to(choices::get_employee_choices))
            .route("/departments", web::get().to(choices::get_department_choices))
            .route("/refresh", web::post().to(choices::refresh_choices)),
    );
}
