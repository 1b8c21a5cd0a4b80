use actix_web::web;

pub mod backend_health;
pub mod workouts;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(workouts::get_workout)
        .service(workouts::create_workout)
        .service(workouts::update_workout)
        .service(workouts::complete_workout)
        .service(workouts::delete_workout)
        .service(workouts::add_exercise_set)
        .service(workouts::update_exercise_set)
        .service(workouts::delete_exercise)
        .service(workouts::delete_exercise_set);

    // History
    cfg.service(workouts::get_last_workout)
        .service(workouts::get_recent_workouts);
}
