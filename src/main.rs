use timetable_bridge::app::FormBridge;
use timetable_bridge::catalog::{split_slot, TIME_SLOTS, WEEKDAYS};
use timetable_bridge::client::request::NoWasmClient;
use timetable_bridge::config::BridgeConfig;
use timetable_bridge::error::{ErrorKind, Result};
use timetable_bridge::form::{fields, outputs, MemoryForm};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

enum Handler {
    Teacher,
    Class,
    Schedule,
}

fn print_usage(program: &str) {
    println!("用法:");
    println!("  {program} teacher  <教师> <星期> <开始时间> <结束时间>");
    println!("  {program} class    <教室> <星期> <开始时间> <结束时间>");
    println!("  {program} schedule <课程> <教师> <星期> <开始时间> <结束时间>");
    println!("  {program} slots");
    println!("<开始时间> <结束时间> 也可写成一个时段，如 9:00-10:00");
}

/// Trailing `<start> <end>`, or a single `start-end` slot.
fn times(rest: &[String]) -> Result<(String, String)> {
    match rest {
        [start, end] => Ok((start.clone(), end.clone())),
        [slot] => split_slot(slot)
            .map(|(start, end)| (start.to_string(), end.to_string()))
            .ok_or_else(|| ErrorKind::ParseError(format!("Invalid time slot: {slot}")).into()),
        _ => Err(ErrorKind::ParseError("Expected <start> <end> or one time slot".to_string()).into()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "timetable_bridge=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("timetable-bridge");

    let Some(command) = args.get(1) else {
        print_usage(program);
        return Ok(());
    };

    if command == "slots" {
        println!("{}", WEEKDAYS.join(", "));
        for slot in TIME_SLOTS {
            println!("  {slot}");
        }
        return Ok(());
    }

    let form = MemoryForm::scheduling_page();
    let handler = match (command.as_str(), &args[2..]) {
        ("teacher", [teacher, day, rest @ ..]) if !rest.is_empty() => {
            let (start, end) = times(rest)?;
            form.set_value(fields::TEACHER_NAME, teacher);
            form.set_value(fields::DAY, day);
            form.set_value(fields::START_TIME, &start);
            form.set_value(fields::END_TIME, &end);
            Handler::Teacher
        }
        ("class", [class_name, day, rest @ ..]) if !rest.is_empty() => {
            let (start, end) = times(rest)?;
            form.set_value(fields::CLASS_NAME, class_name);
            form.set_value(fields::CLASS_DAY, day);
            form.set_value(fields::CLASS_START_TIME, &start);
            form.set_value(fields::CLASS_END_TIME, &end);
            Handler::Class
        }
        ("schedule", [class_name, teacher, day, rest @ ..]) if !rest.is_empty() => {
            let (start, end) = times(rest)?;
            form.set_value(fields::SCHEDULE_CLASS_NAME, class_name);
            form.set_value(fields::SCHEDULE_TEACHER_NAME, teacher);
            form.set_value(fields::SCHEDULE_DAY, day);
            form.set_value(fields::SCHEDULE_START_TIME, &start);
            form.set_value(fields::SCHEDULE_END_TIME, &end);
            Handler::Schedule
        }
        _ => {
            print_usage(program);
            return Ok(());
        }
    };

    let config = BridgeConfig::new_from_env()?;
    log::info!("using server {}", config.base_url);
    let bridge: FormBridge<_, NoWasmClient> = FormBridge::connect(form, config).await?;

    let output = match handler {
        Handler::Teacher => {
            bridge.check_teacher_availability().await?;
            outputs::TEACHER_AVAILABILITY
        }
        Handler::Class => {
            bridge.check_class_availability().await?;
            outputs::CLASS_AVAILABILITY
        }
        Handler::Schedule => {
            bridge.schedule_class().await?;
            outputs::SCHEDULE_RESULT
        }
    };

    println!("{}", bridge.form().text(output).unwrap_or_default());
    Ok(())
}
