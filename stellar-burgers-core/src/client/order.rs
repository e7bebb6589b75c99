//! Order and ingredient catalog client

use super::step::Step;
use super::{RequestSpec, ResponseHandle};
use crate::domain::result::{Error, Result};
use crate::domain::{AccessToken, IngredientsResponse, Order};

const ORDERS_PATH: &str = "orders";
const INGREDIENTS_PATH: &str = "ingredients";

/// Well-formed ingredient id that no catalog entry carries
pub const NON_EXISTENT_INGREDIENT_ID: &str = "60d3b41abdacab0026a733ff";

/// Client for `orders` and `ingredients`
#[derive(Debug, Clone)]
pub struct OrderClient {
    spec: RequestSpec,
}

impl OrderClient {
    pub fn new(spec: RequestSpec) -> Self {
        Self { spec }
    }

    pub fn create_order(
        &self,
        access_token: &AccessToken,
        order: &Order,
    ) -> Result<ResponseHandle> {
        let step = Step::new("Create order")
            .arg("token", access_token)
            .arg("order", order);
        let request = self.spec.post(ORDERS_PATH)?.bearer(access_token).json(order)?;
        self.spec.execute(&step, request)
    }

    pub fn create_order_unauthorized(&self, order: &Order) -> Result<ResponseHandle> {
        let step = Step::new("Create order without authorization").arg("order", order);
        let request = self.spec.post(ORDERS_PATH)?.json(order)?;
        self.spec.execute(&step, request)
    }

    pub fn get_orders_of_user(&self, access_token: &AccessToken) -> Result<ResponseHandle> {
        let step = Step::new("Get orders of user").arg("token", access_token);
        let request = self.spec.get(ORDERS_PATH)?.bearer(access_token);
        self.spec.execute(&step, request)
    }

    pub fn get_unauthorised_orders_of_user(&self) -> Result<ResponseHandle> {
        let step = Step::new("Get orders of user without authorization");
        let request = self.spec.get(ORDERS_PATH)?;
        self.spec.execute(&step, request)
    }

    /// Raw catalog response
    pub fn list_ingredients(&self) -> Result<ResponseHandle> {
        let step = Step::new("List ingredients");
        let request = self.spec.get(INGREDIENTS_PATH)?;
        self.spec.execute(&step, request)
    }

    /// First `count` ingredient ids from the catalog, in catalog order
    ///
    /// Returns fewer when the catalog is smaller; the caller decides
    /// whether that matters. A failed or malformed catalog response is a
    /// decode error since no ids can be produced from it.
    pub fn get_ingredients(&self, count: usize) -> Result<Vec<String>> {
        let step = Step::new("Get ingredients").arg("count", &count);
        step.run(|| {
            let response = self.list_ingredients()?;
            if !response.status().is_success() {
                return Err(Error::decode(format!(
                    "Ingredient catalog returned HTTP {}",
                    response.status_code()
                )));
            }

            let catalog: IngredientsResponse = response.body_as()?;
            Ok(catalog
                .data
                .into_iter()
                .take(count)
                .map(|ingredient| ingredient.id)
                .collect())
        })
    }
}
