use std::time::Duration;

use clap::Parser;
use color_eyre::{Result, eyre::eyre};
use elearn_headless::{
	AnswerCache, activity,
	browser::{self, CdpElement, CdpNavigator},
	config::AppConfig,
	exam::{self, ExamSession},
	login,
	navigator::CourseNavigator,
	pick, prompt,
};
use regex::Regex;

#[derive(Debug, Parser)]
#[command(name = "elearn_headless")]
#[command(about = "Automated e-learning course completion", long_about = None)]
struct Args {
	/// Run with visible browser window (non-headless mode)
	#[arg(long)]
	visible: bool,

	/// Username for the course platform login
	#[arg(short, long)]
	username: String,

	/// Password for the course platform login
	#[arg(short, long)]
	password: String,

	/// Course URL to open after login
	#[arg(short, long)]
	course_url: String,
}

const WELCOME_MESSAGES: [&str; 3] = [
	"Course autopilot waking up.",
	"Starting up; the course won't finish itself, apparently.",
	"Good to go. Pointing the browser at the course.",
];

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	let args = Args::parse();
	let config = AppConfig::with_credentials(args.username, args.password, args.course_url, args.visible);

	println!("{}", pick(&WELCOME_MESSAGES));
	println!("Visible mode: {}", config.visible);

	let (mut browser, handle) = browser::launch(&config).await?;
	let page = browser.new_page("about:blank").await.map_err(|e| eyre!("Failed to create new page: {}", e))?;

	login::login(&page, &config).await?;
	tokio::time::sleep(Duration::from_secs(3)).await;

	println!("Navigating to the course...");
	page.goto(&config.course_url).await.map_err(|e| eyre!("Failed to navigate to course: {}", e))?;
	tokio::time::sleep(Duration::from_secs(5)).await;

	// answers survive across assessments: repeated pools cost nothing extra
	let mut answers = AnswerCache::new();
	let mut navigator = CdpNavigator::new(page.clone());
	// the intro section of every module page is numbered like X.Y and needs no completion
	let numbered_intro = Regex::new(r"^\d+\.\d+\s").map_err(|e| eyre!("Regex error: {}", e))?;

	let mut module_count = 0u32;
	loop {
		module_count += 1;
		println!("\nModule page {}", module_count);

		for section in navigator.sections().await? {
			if let Err(e) = complete_section(&navigator, &section, &mut answers, &config, &numbered_intro).await {
				eprintln!("Error completing section: {e}");
			}
		}

		if !navigator.advance().await? {
			break;
		}
	}

	println!("All module pages completed!");
	prompt::wait_for_operator(&config, "Course run finished; review the result and acknowledge to close.").await;

	drop(page);
	browser.close().await.map_err(|e| eyre!("Failed to close browser: {}", e))?;
	handle.abort();

	Ok(())
}

async fn complete_section(
	navigator: &CdpNavigator,
	section: &CdpElement,
	answers: &mut AnswerCache,
	config: &AppConfig,
	numbered_intro: &Regex,
) -> Result<()> {
	if navigator.is_section_complete(section).await? {
		return Ok(());
	}
	if let Some(title) = navigator.section_title(section).await? {
		if numbered_intro.is_match(title.trim()) {
			return Ok(());
		}
		println!("Section: {title}");
	}

	if exam::is_exam_section(section).await {
		let mut session = ExamSession::new(section.clone(), answers, config);
		session.run().await?;
		return Ok(());
	}

	navigator.read_through(section).await?;
	activity::run_all(section, config).await;
	Ok(())
}
