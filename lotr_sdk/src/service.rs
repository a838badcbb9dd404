//! The five public operations over The One API.
//!
//! Every operation returns an [`Envelope`]. Transport, status and decoding
//! errors as well as business-rule failures are folded into the envelope
//! as `success = false` plus a message, so callers never handle a `Result`
//! or a panic from this layer.

use lotr_api::types::{Envelope, Movie, Quote};
use lotr_api::{Client, Pagination};
use rand::Rng;

use crate::error::SdkError;
use crate::verdict::ScoreVerdict;

/// Typed operations for movies and quotes.
///
/// Wraps a single [`Client`], whose connection pool is shared by all calls.
/// Each operation makes exactly one HTTP request.
pub struct MovieService {
    inner: Client,
}

impl MovieService {
    /// Creates a service configured from the environment
    /// (`LOTR_API_BASE_URL`, `LOTR_API_TOKEN`).
    pub fn new() -> Result<Self, SdkError> {
        Ok(Self::with_client(Client::new()?))
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Creates a service with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Result<Self, SdkError> {
        Ok(Self::with_client(Client::with_base_url(base_url)?))
    }

    pub fn client(&self) -> &Client {
        &self.inner
    }

    /// Lists movies. Unset pagination values are left to the server
    /// (page 1, limit 1000, offset 0). An empty page is still a success.
    pub async fn list_movies(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
        offset: Option<u32>,
        token: Option<&str>,
    ) -> Envelope<Movie> {
        let query = Pagination::new(page, limit, offset);
        match self.inner.get_movies(&query, token).await {
            Ok(movies) => movies,
            Err(e) => failed("list_movies", e.into()),
        }
    }

    /// Fetches one movie. An unknown id fails with
    /// "There is no movie with id {id}".
    pub async fn get_movie_by_id(&self, id: &str, token: Option<&str>) -> Envelope<Movie> {
        self.fetch_movie("get_movie_by_id", id, token).await
    }

    /// Lists quotes for a movie. Movies outside the trilogy have no quotes
    /// and fail with a hint saying so.
    pub async fn list_quotes(
        &self,
        movie_id: &str,
        page: Option<u32>,
        limit: Option<u32>,
        offset: Option<u32>,
        token: Option<&str>,
    ) -> Envelope<Quote> {
        let query = Pagination::new(page, limit, offset);
        let quotes = match self.inner.get_movie_quotes(movie_id, &query, token).await {
            Ok(quotes) => quotes,
            Err(e) => return failed("list_quotes", e.into()),
        };
        if quotes.is_empty() {
            return rejected("list_quotes", quotes, SdkError::NoQuotes);
        }
        quotes
    }

    /// Picks one movie uniformly at random from the server's default page.
    ///
    /// `docs` holds exactly one movie on success. The pagination fields are
    /// left as the server reported them for the full page.
    pub async fn random_movie(&self, token: Option<&str>) -> Envelope<Movie> {
        let mut movies = match self.inner.get_movies(&Pagination::default(), token).await {
            Ok(movies) => movies,
            Err(e) => return failed("random_movie", e.into()),
        };
        if movies.is_empty() {
            return rejected("random_movie", movies, SdkError::EmptyCatalog);
        }
        let pick = rand::thread_rng().gen_range(0..movies.docs.len());
        let movie = movies.docs.swap_remove(pick);
        movies.docs = vec![movie];
        movies
    }

    /// Compares a movie's Rotten Tomatoes score with `score`.
    ///
    /// The verdict is returned in `message`; the movie stays in `docs`.
    /// A NaN `score` compares as equal.
    pub async fn compare_score(
        &self,
        movie_id: &str,
        score: f64,
        token: Option<&str>,
    ) -> Envelope<Movie> {
        let mut movie = self.fetch_movie("compare_score", movie_id, token).await;
        if !movie.success {
            return movie;
        }
        if let Some(verdict) = movie
            .docs
            .first()
            .map(|m| ScoreVerdict::of(m.rotten_tomatoes_score, score))
        {
            tracing::debug!("{} scored {:?} against {}", movie_id, verdict, score);
            movie.message = Some(verdict.to_string());
        }
        movie
    }

    async fn fetch_movie(&self, op: &str, id: &str, token: Option<&str>) -> Envelope<Movie> {
        let movie = match self.inner.get_movie(id, token).await {
            Ok(movie) => movie,
            Err(e) => return failed(op, e.into()),
        };
        if movie.is_empty() {
            return rejected(
                op,
                movie,
                SdkError::MovieNotFound { id: id.to_string() },
            );
        }
        movie
    }
}

fn failed<T>(op: &str, err: SdkError) -> Envelope<T> {
    tracing::warn!("{} failed: {}", op, err);
    Envelope::failure(err)
}

fn rejected<T>(op: &str, envelope: Envelope<T>, err: SdkError) -> Envelope<T> {
    tracing::warn!("{} rejected: {}", op, err);
    envelope.reject(err)
}
