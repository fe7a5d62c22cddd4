use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_platform_server::{
    app_state::AppState,
    config::Config,
    handlers::{
        auth_handler, course_handler, grade_handler, quiz_handler, storage_handler, user_handler,
    },
};

fn cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://127.0.0.1:8080")
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = match AppState::new(config).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            log::error!("Failed to initialize backing stores: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors())
            .app_data(web::Data::new(state.clone()))
            // the session extractor resolves these two on its own
            .app_data(web::Data::from(state.user_service.clone()))
            .app_data(web::Data::from(state.jwt_service.clone()))
            // auth
            .service(auth_handler::login)
            .service(auth_handler::logout)
            .service(auth_handler::register)
            .service(auth_handler::current_user)
            .service(auth_handler::update_current_user)
            .service(auth_handler::auth_test)
            // users
            .service(user_handler::create_user)
            .service(user_handler::list_users)
            .service(user_handler::get_user)
            .service(user_handler::update_user)
            .service(user_handler::delete_user)
            // courses
            .service(course_handler::create_course)
            .service(course_handler::list_courses)
            .service(course_handler::get_course)
            .service(course_handler::update_course)
            .service(course_handler::delete_course)
            // grades (filtered reads before the {id} routes)
            .service(grade_handler::create_grade)
            .service(grade_handler::list_grades)
            .service(grade_handler::completed_quiz_numbers)
            .service(grade_handler::user_progress)
            .service(grade_handler::get_grade)
            .service(grade_handler::update_grade)
            .service(grade_handler::delete_grade)
            // quizzes (course routes before the {quiz_id} route)
            .service(quiz_handler::create_quiz)
            .service(quiz_handler::list_quizzes)
            .service(quiz_handler::course_overview)
            .service(quiz_handler::get_quiz_by_number)
            .service(quiz_handler::add_question)
            .service(quiz_handler::update_quiz)
            .service(quiz_handler::update_question_answers)
            .service(quiz_handler::update_question)
            .service(quiz_handler::delete_quiz)
            .service(quiz_handler::get_quiz)
            // blob storage
            .service(storage_handler::upload_image)
            .service(storage_handler::update_image)
            .service(storage_handler::delete_image)
            // health
            .service(user_handler::health_check)
            .service(user_handler::health_check_ready)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
