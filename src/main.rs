use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use learnitor_admin::{
    cli, config, error,
    types::{
        AnswerDraft, AnswerPatch, CourseDraft, CoursePatch, Level, MaterialDraft, MaterialKind,
        MaterialPatch, QuestionDraft, RecordId, TopicDraft, TopicPatch,
    },
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sign in with email and password
    Login(LoginOptions),

    /// Sign out and forget the stored session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Show course, topic and question totals
    Dashboard,

    /// Handle courses
    Courses(CoursesOptions),

    /// Handle course categories
    Categories(CategoriesOptions),

    /// Handle the topics of a course
    Topics(TopicsOptions),

    /// Handle the questions of a topic
    Questions(QuestionsOptions),

    /// Handle the answers of a question
    Answers(AnswersOptions),

    /// Handle the study materials of a topic
    Materials(MaterialsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    /// Account email
    pub email: String,

    /// Account password
    #[clap(long, env = "LEARNITOR_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Parser, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct CoursesOptions {
    /// Only show courses in any of these categories; can be repeated
    #[clap(long = "category", num_args = 1)]
    pub categories: Vec<RecordId>,

    /// Count topics and questions per course
    #[clap(long)]
    pub details: bool,

    #[command(subcommand)]
    pub command: Option<CoursesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CoursesSubcommand {
    /// Create a course
    Add(CourseAddOpts),
    /// Change fields of a course
    Update(CourseUpdateOpts),
    /// Delete a course
    Delete(IdOpts),
}

#[derive(Args, Debug, Clone)]
pub struct CourseAddOpts {
    #[clap(long)]
    pub title: String,
    #[clap(long, default_value = "")]
    pub description: String,
    #[clap(long, default_value = "")]
    pub url: String,
    /// Category id; can be repeated
    #[clap(long = "category", num_args = 1)]
    pub categories: Vec<RecordId>,
}

#[derive(Args, Debug, Clone)]
pub struct CourseUpdateOpts {
    pub id: RecordId,
    #[clap(long)]
    pub title: Option<String>,
    #[clap(long)]
    pub description: Option<String>,
    #[clap(long)]
    pub url: Option<String>,
    /// Replaces the course's categories; can be repeated
    #[clap(long = "category", num_args = 1)]
    pub categories: Option<Vec<RecordId>>,
}

#[derive(Args, Debug, Clone)]
pub struct IdOpts {
    pub id: RecordId,
}

#[derive(Parser, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct CategoriesOptions {
    #[command(subcommand)]
    pub command: Option<CategoriesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CategoriesSubcommand {
    /// Create a category
    Add { name: String },
    /// Rename a category
    Rename { id: RecordId, name: String },
    /// Delete a category
    Delete(IdOpts),
}

#[derive(Parser, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct TopicsOptions {
    /// Course to list topics of
    #[clap(long)]
    pub course: Option<RecordId>,

    #[command(subcommand)]
    pub command: Option<TopicsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TopicsSubcommand {
    /// Create a topic in a course
    Add(TopicAddOpts),
    /// Change fields of a topic
    Update(TopicUpdateOpts),
    /// Delete a topic
    Delete(IdOpts),
}

#[derive(Args, Debug, Clone)]
pub struct TopicAddOpts {
    #[clap(long)]
    pub course: RecordId,
    #[clap(long)]
    pub title: String,
    #[clap(long, default_value = "")]
    pub description: String,
}

#[derive(Args, Debug, Clone)]
pub struct TopicUpdateOpts {
    pub id: RecordId,
    #[clap(long)]
    pub title: Option<String>,
    #[clap(long)]
    pub description: Option<String>,
    /// Move the topic to another course
    #[clap(long)]
    pub course: Option<RecordId>,
}

#[derive(Parser, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct QuestionsOptions {
    /// Topic to list questions of
    #[clap(long)]
    pub topic: Option<RecordId>,

    /// Only this difficulty level
    #[clap(long, value_enum)]
    pub level: Option<Level>,

    /// Print every question in full together with its answers
    #[clap(long)]
    pub full: bool,

    #[command(subcommand)]
    pub command: Option<QuestionsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum QuestionsSubcommand {
    /// Create a question
    Add(QuestionOpts),
    /// Replace a question
    Update {
        id: RecordId,
        #[command(flatten)]
        question: QuestionOpts,
    },
    /// Delete a question
    Delete(IdOpts),
}

#[derive(Args, Debug, Clone)]
pub struct QuestionOpts {
    #[clap(long)]
    pub topic: RecordId,
    #[clap(long, value_enum)]
    pub level: Level,
    #[clap(long)]
    pub text: String,
    /// Seconds allowed to answer
    #[clap(long)]
    pub duration: Option<u32>,
}

impl From<QuestionOpts> for QuestionDraft {
    fn from(opts: QuestionOpts) -> Self {
        QuestionDraft {
            text: opts.text,
            duration: opts.duration,
            topic: opts.topic,
            level: opts.level,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct AnswersOptions {
    /// Question to list answers of
    #[clap(long)]
    pub question: Option<RecordId>,

    #[command(subcommand)]
    pub command: Option<AnswersSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AnswersSubcommand {
    /// Create an answer
    Add {
        #[clap(long)]
        question: RecordId,
        #[clap(long)]
        text: String,
        /// Mark the answer as correct
        #[clap(long)]
        correct: bool,
    },
    /// Change an answer
    Update {
        id: RecordId,
        #[clap(long)]
        text: Option<String>,
        /// Whether the answer is correct
        #[clap(long)]
        correct: Option<bool>,
    },
    /// Delete an answer
    Delete(IdOpts),
}

#[derive(Parser, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct MaterialsOptions {
    /// Topic to list materials of
    #[clap(long)]
    pub topic: Option<RecordId>,

    #[command(subcommand)]
    pub command: Option<MaterialsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MaterialsSubcommand {
    /// Create a material
    Add {
        #[clap(long)]
        topic: RecordId,
        #[clap(long = "type", value_enum)]
        kind: MaterialKind,
        #[clap(long)]
        name: String,
        #[clap(long)]
        link: String,
    },
    /// Change a material
    Update {
        id: RecordId,
        #[clap(long = "type", value_enum)]
        kind: Option<MaterialKind>,
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        link: Option<String>,
    },
    /// Delete a material
    Delete(IdOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Login(opt) => cli::login(&opt.email, &opt.password).await,
        Command::Logout => cli::logout().await,
        Command::Whoami => cli::whoami().await,
        Command::Dashboard => cli::dashboard().await,

        Command::Courses(opt) => match opt.command {
            Some(CoursesSubcommand::Add(a)) => {
                cli::add_course(CourseDraft {
                    title: a.title,
                    description: a.description,
                    url: a.url,
                    category: a.categories,
                })
                .await
            }
            Some(CoursesSubcommand::Update(u)) => {
                cli::update_course(
                    u.id,
                    CoursePatch {
                        title: u.title,
                        description: u.description,
                        url: u.url,
                        category: u.categories,
                    },
                )
                .await
            }
            Some(CoursesSubcommand::Delete(d)) => cli::delete_course(d.id).await,
            None => cli::list_courses(opt.categories, opt.details).await,
        },

        Command::Categories(opt) => match opt.command {
            Some(CategoriesSubcommand::Add { name }) => cli::add_category(name).await,
            Some(CategoriesSubcommand::Rename { id, name }) => cli::rename_category(id, name).await,
            Some(CategoriesSubcommand::Delete(d)) => cli::delete_category(d.id).await,
            None => cli::list_categories().await,
        },

        Command::Topics(opt) => match opt.command {
            Some(TopicsSubcommand::Add(a)) => {
                cli::add_topic(TopicDraft {
                    title: a.title,
                    description: a.description,
                    course: a.course,
                })
                .await
            }
            Some(TopicsSubcommand::Update(u)) => {
                cli::update_topic(
                    u.id,
                    TopicPatch {
                        title: u.title,
                        description: u.description,
                        course: u.course,
                    },
                )
                .await
            }
            Some(TopicsSubcommand::Delete(d)) => cli::delete_topic(d.id).await,
            None => match opt.course {
                Some(course_id) => cli::list_topics(course_id).await,
                None => error!("Please pass --course <ID> to list topics"),
            },
        },

        Command::Questions(opt) => match opt.command {
            Some(QuestionsSubcommand::Add(q)) => cli::add_question(q.into()).await,
            Some(QuestionsSubcommand::Update { id, question }) => {
                cli::update_question(id, question.into()).await
            }
            Some(QuestionsSubcommand::Delete(d)) => cli::delete_question(d.id).await,
            None => match opt.topic {
                Some(topic_id) => cli::list_questions(topic_id, opt.level, opt.full).await,
                None => error!("Please pass --topic <ID> to list questions"),
            },
        },

        Command::Answers(opt) => match opt.command {
            Some(AnswersSubcommand::Add {
                question,
                text,
                correct,
            }) => {
                cli::add_answer(AnswerDraft {
                    text,
                    is_right: correct,
                    question,
                })
                .await
            }
            Some(AnswersSubcommand::Update { id, text, correct }) => {
                cli::update_answer(
                    id,
                    AnswerPatch {
                        text,
                        is_right: correct,
                        question: None,
                    },
                )
                .await
            }
            Some(AnswersSubcommand::Delete(d)) => cli::delete_answer(d.id).await,
            None => match opt.question {
                Some(question_id) => cli::list_answers(question_id).await,
                None => error!("Please pass --question <ID> to list answers"),
            },
        },

        Command::Materials(opt) => match opt.command {
            Some(MaterialsSubcommand::Add {
                topic,
                kind,
                name,
                link,
            }) => {
                cli::add_material(MaterialDraft {
                    name,
                    link,
                    kind,
                    topic,
                })
                .await
            }
            Some(MaterialsSubcommand::Update { id, kind, name, link }) => {
                cli::update_material(
                    id,
                    MaterialPatch {
                        name,
                        link,
                        kind,
                        topic: None,
                    },
                )
                .await
            }
            Some(MaterialsSubcommand::Delete(d)) => cli::delete_material(d.id).await,
            None => match opt.topic {
                Some(topic_id) => cli::list_materials(topic_id).await,
                None => error!("Please pass --topic <ID> to list materials"),
            },
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
