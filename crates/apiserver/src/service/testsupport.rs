//! In-memory repository fakes backing the service tests.

use crate::{
    abstract_trait::{
        CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait,
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, SaleCommandRepositoryTrait,
        SaleQueryRepositoryTrait, UserCommandRepositoryTrait, UserQueryRepositoryTrait,
    },
    domain::requests::{
        pagination::SortOrder,
        product::{CreateProductRecord, UpdateProductRecord},
        sale::CreateSaleRecord,
        user::{CreateUserRecord, UpdateUserRecord},
    },
};
use async_trait::async_trait;
use shared::{
    errors::RepositoryError,
    model::{Category, Product, ROLE_ADMIN, ROLE_STANDARD, Sale, SaleWithRelations, User},
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<Vec<User>>,
    pub categories: Mutex<Vec<Category>>,
    pub products: Mutex<Vec<Product>>,
    pub sales: Mutex<Vec<Sale>>,
    next_id: Mutex<i32>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn alloc_id(&self) -> i32 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }

    pub fn seed_user(&self, name: &str, email: &str, cpf: &str, admin: bool) -> User {
        let user = User {
            user_id: self.alloc_id(),
            name: name.into(),
            email: email.into(),
            cpf: cpf.into(),
            password: "hashed".into(),
            role: if admin { ROLE_ADMIN } else { ROLE_STANDARD },
            active: true,
            created_at: None,
            updated_at: None,
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn seed_category(&self, name: &str) -> Category {
        let category = Category {
            category_id: self.alloc_id(),
            name: name.into(),
            created_at: None,
            updated_at: None,
        };
        self.categories.lock().unwrap().push(category.clone());
        category
    }

    pub fn seed_product(&self, name: &str, category_id: i32, user_id: i32, quantity: i32) -> Product {
        let product = Product {
            product_id: self.alloc_id(),
            name: name.into(),
            price: 9.99,
            category_id,
            quantity,
            user_id,
            created_at: None,
            updated_at: None,
        };
        self.products.lock().unwrap().push(product.clone());
        product
    }

    pub fn product_quantity(&self, id: i32) -> i32 {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.product_id == id)
            .map(|p| p.quantity)
            .expect("unknown product")
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.cpf == cpf)
            .cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for MemoryStore {
    async fn create_user(&self, req: &CreateUserRecord) -> Result<User, RepositoryError> {
        let id = self.alloc_id();
        let mut users = self.users.lock().unwrap();

        let (role, active) = if users.is_empty() {
            (ROLE_ADMIN, true)
        } else {
            (ROLE_STANDARD, false)
        };

        let user = User {
            user_id: id,
            name: req.name.clone(),
            email: req.email.clone(),
            cpf: req.cpf.clone(),
            password: req.password.clone(),
            role,
            active,
            created_at: None,
            updated_at: None,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, req: &UpdateUserRecord) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.user_id == req.user_id)
            .ok_or(RepositoryError::NotFound)?;

        user.name = req.name.clone();
        user.email = req.email.clone();
        user.password = req.password.clone();
        Ok(user.clone())
    }

    async fn set_active(&self, id: i32, active: bool) -> Result<Option<User>, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.user_id == id).map(|user| {
            user.active = active;
            user.clone()
        }))
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.category_id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for MemoryStore {
    async fn create_category(&self, name: &str) -> Result<Category, RepositoryError> {
        let category = Category {
            category_id: self.alloc_id(),
            name: name.into(),
            created_at: None,
            updated_at: None,
        };
        self.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: i32, name: &str) -> Result<Category, RepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        let category = categories
            .iter_mut()
            .find(|c| c.category_id == id)
            .ok_or(RepositoryError::NotFound)?;
        category.name = name.into();
        Ok(category.clone())
    }

    async fn delete_category(&self, id: i32) -> Result<(), RepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.category_id != id);
        if categories.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.product_id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn find_all(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.products.lock().unwrap().clone();
        products.sort_by_key(|p| p.product_id);
        if order == SortOrder::Desc {
            products.reverse();
        }
        Ok(products
            .into_iter()
            .skip(skip as usize)
            .take(take as usize)
            .collect())
    }

    async fn count_by_category(&self, category_id: i32) -> Result<i64, RepositoryError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category_id == category_id)
            .count() as i64)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryStore {
    async fn create_product(&self, req: &CreateProductRecord) -> Result<Product, RepositoryError> {
        let product = Product {
            product_id: self.alloc_id(),
            name: req.name.clone(),
            price: req.price,
            category_id: req.category_id,
            quantity: 0,
            user_id: req.user_id,
            created_at: None,
            updated_at: None,
        };
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, req: &UpdateProductRecord) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.product_id == req.product_id)
            .ok_or(RepositoryError::NotFound)?;

        product.name = req.name.clone();
        product.price = req.price;
        product.category_id = req.category_id;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.product_id != id);
        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn adjust_stock(&self, id: i32, delta: i32) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.lock().unwrap();
        Ok(products
            .iter_mut()
            .find(|p| p.product_id == id && p.quantity + delta >= 0)
            .map(|product| {
                product.quantity += delta;
                product.clone()
            }))
    }
}

#[async_trait]
impl SaleQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<SaleWithRelations>, RepositoryError> {
        let sales = self.sales.lock().unwrap().clone();
        let products = self.products.lock().unwrap().clone();
        let users = self.users.lock().unwrap().clone();

        let mut joined: Vec<SaleWithRelations> = sales
            .iter()
            .filter_map(|sale| {
                let product = products.iter().find(|p| p.product_id == sale.product_id)?;
                let user = users.iter().find(|u| u.user_id == sale.user_id)?;
                Some(SaleWithRelations {
                    sale_id: sale.sale_id,
                    quantity: sale.quantity,
                    price: sale.price,
                    created_at: sale.created_at,
                    product_id: product.product_id,
                    product_name: product.name.clone(),
                    product_price: product.price,
                    user_id: user.user_id,
                    user_name: user.name.clone(),
                })
            })
            .collect();

        joined.sort_by_key(|s| s.sale_id);
        if order == SortOrder::Desc {
            joined.reverse();
        }
        Ok(joined
            .into_iter()
            .skip(skip as usize)
            .take(take as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Sale>, RepositoryError> {
        Ok(self
            .sales
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.sale_id == id)
            .cloned())
    }
}

#[async_trait]
impl SaleCommandRepositoryTrait for MemoryStore {
    async fn create_sale(&self, req: &CreateSaleRecord) -> Result<Sale, RepositoryError> {
        let id = self.alloc_id();

        {
            let mut products = self.products.lock().unwrap();
            let product = products
                .iter_mut()
                .find(|p| p.product_id == req.product_id)
                .ok_or(RepositoryError::NotFound)?;

            if product.quantity < req.quantity {
                return Err(RepositoryError::InsufficientStock(format!(
                    "The stock has only {} units of product {}",
                    product.quantity, product.name
                )));
            }

            product.quantity -= req.quantity;
        }

        let sale = Sale {
            sale_id: id,
            product_id: req.product_id,
            quantity: req.quantity,
            price: req.price,
            user_id: req.user_id,
            created_at: None,
        };
        self.sales.lock().unwrap().push(sale.clone());
        Ok(sale)
    }

    async fn delete_sale(&self, id: i32) -> Result<(), RepositoryError> {
        let sale = {
            let sales = self.sales.lock().unwrap();
            sales.iter().find(|s| s.sale_id == id).cloned()
        }
        .ok_or(RepositoryError::NotFound)?;

        {
            let mut products = self.products.lock().unwrap();
            if let Some(product) = products
                .iter_mut()
                .find(|p| p.product_id == sale.product_id)
            {
                product.quantity += sale.quantity;
            }
        }

        self.sales.lock().unwrap().retain(|s| s.sale_id != id);
        Ok(())
    }
}
