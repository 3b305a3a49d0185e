use crate::common::*;

use crate::controller::app_error::*;
use crate::enums::category::*;
use crate::env_configuration::env_config::*;
use crate::model::configs::server_config::*;
use crate::traits::service_traits::trend_report_service::*;

#[doc = "Form body of the category routes; a missing field is rejected like an unknown label"]
#[derive(Debug, Deserialize)]
pub struct ClothingTypeForm {
    pub clothing_type: Option<String>,
}

impl ClothingTypeForm {
    fn category(&self) -> Result<Category, InvalidCategoryError> {
        Category::from_str(self.clothing_type.as_deref().unwrap_or_default())
    }
}

#[doc = r#"
    Category of a category-route request.

    A body that is not a readable form (wrong content type, malformed encoding)
    carries no category, so it is rejected with the same 400 as a missing field.
"#]
fn requested_category(
    form: Result<Form<ClothingTypeForm>, FormRejection>,
) -> Result<Category, InvalidCategoryError> {
    match form {
        Ok(Form(form)) => form.category(),
        Err(rejection) => {
            warn!("[requested_category] Unreadable form body: {}", rejection);
            Err(InvalidCategoryError(String::new()))
        }
    }
}

#[derive(Debug, new)]
pub struct MainController<R: TrendReportService> {
    report_service: R,
}

impl<R: TrendReportService + 'static> MainController<R> {
    #[doc = r#"
        Builds the application router.

        # Arguments
        * `static_dir` - Directory the generated images are written to, served under `/static`
    "#]
    pub fn router(self: Arc<Self>, static_dir: &Path) -> Router {
        Router::new()
            .route("/", get(Self::index))
            .route("/update_plot", post(Self::update_plot))
            .route("/show_trends", post(Self::show_trends))
            .route("/show_all_trends", get(Self::show_all_trends))
            .nest_service(&format!("/{}", STATIC_URL_PREFIX), ServeDir::new(static_dir))
            .with_state(self)
    }

    #[doc = r#"
        Binds the listen address and serves requests until the process stops.

        # Arguments
        * `server_config` - Listen host and port
        * `static_dir` - Image output directory
    "#]
    pub async fn main_task(
        self,
        server_config: &ServerConfig,
        static_dir: &Path,
    ) -> anyhow::Result<()> {
        let addr: SocketAddr = server_config.socket_addr()?;
        let app: Router = Arc::new(self).router(static_dir);

        let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("[MainController->main_task] Failed to bind {}", addr))?;

        info!("Fashion trend server listening on http://{}", addr);

        axum::serve(listener, app)
            .await
            .context("[MainController->main_task] Server terminated abnormally")?;

        Ok(())
    }

    async fn index(State(controller): State<Arc<Self>>) -> Result<Html<String>, AppError> {
        let html_content: String = controller.report_service.index_page().await?;
        Ok(Html(html_content))
    }

    async fn update_plot(
        State(controller): State<Arc<Self>>,
        form: Result<Form<ClothingTypeForm>, FormRejection>,
    ) -> Result<String, AppError> {
        let category: Category = requested_category(form)?;
        info!("[MainController->update_plot] clothing_type: {}", category);

        Ok(controller.report_service.update_plot(category).await?)
    }

    async fn show_trends(
        State(controller): State<Arc<Self>>,
        form: Result<Form<ClothingTypeForm>, FormRejection>,
    ) -> Result<Html<String>, AppError> {
        let category: Category = requested_category(form)?;
        info!("[MainController->show_trends] clothing_type: {}", category);

        let html_content: String = controller.report_service.show_trends_page(category).await?;
        Ok(Html(html_content))
    }

    async fn show_all_trends(
        State(controller): State<Arc<Self>>,
    ) -> Result<Html<String>, AppError> {
        let html_content: String = controller.report_service.show_all_trends_page().await?;
        Ok(Html(html_content))
    }
}
